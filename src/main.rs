//! Skyhook entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use skyhook::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use skyhook::sim::{Action, InputEvent, SimContext, tick_in_place};
    use skyhook::view::{FrameView, colors};
    use skyhook::{Level, Settings, Tuning, Zone};

    /// Game instance holding all state
    struct Game {
        ctx: SimContext,
        settings: Settings,
        draw: CanvasRenderingContext2d,
    }

    impl Game {
        fn new(draw: CanvasRenderingContext2d) -> Self {
            Self {
                ctx: SimContext::new(Tuning::default()),
                settings: Settings::load(),
                draw,
            }
        }

        /// Translate a browser key edge into a simulation input edge
        fn key_event(&mut self, event: &KeyboardEvent, pressed: bool) {
            let Some(action) = self.settings.bindings.action_for(&event.key()) else {
                return;
            };
            // Auto-repeat would re-fire grapple activation
            if pressed && event.repeat() && action == Action::Grapple {
                return;
            }
            let edge = if pressed {
                InputEvent::Pressed(action)
            } else {
                InputEvent::Released(action)
            };
            self.ctx.handle_event(edge);
        }

        fn start_zone(&mut self, zone: Zone) {
            self.ctx.start_level(&Level::builtin(zone));
        }

        /// Draw the current frame
        fn render(&self, view: &FrameView) {
            let d = &self.draw;

            d.set_fill_style_str(&view.sky_css);
            d.fill_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);

            if let Some((from, to)) = view.grapple_line {
                d.set_stroke_style_str(colors::GRAPPLE_LINE);
                if self.settings.dashed_grapple_line {
                    let dash = js_sys::Array::of2(
                        &colors::GRAPPLE_DASH[0].into(),
                        &colors::GRAPPLE_DASH[1].into(),
                    );
                    let _ = d.set_line_dash(&dash);
                }
                d.begin_path();
                d.move_to(from.x as f64, from.y as f64);
                d.line_to(to.x as f64, to.y as f64);
                d.stroke();
                let _ = d.set_line_dash(&js_sys::Array::new());
            }

            d.set_fill_style_str(colors::PLATFORM_FILL);
            d.set_stroke_style_str(colors::PLATFORM_STROKE);
            for p in &view.platforms {
                d.fill_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);
                d.stroke_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);
            }

            let r = view.player;
            d.set_fill_style_str(view.player_color);
            if self.settings.player_glow {
                d.set_shadow_blur(colors::PLAYER_GLOW);
                d.set_shadow_color(view.player_color);
            }
            d.fill_rect(r.x as f64, r.y as f64, r.w as f64, r.h as f64);
            d.set_shadow_blur(0.0);
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, document: &Document, view: &FrameView) {
            if !self.settings.show_hud {
                return;
            }
            if let Some(el) = document.get_element_by_id("heat") {
                el.set_text_content(Some(&view.heat.to_string()));
            }
            if let Some(el) = document.get_element_by_id("speed") {
                el.set_text_content(Some(&view.speed.to_string()));
            }
            if let Some(el) = document.get_element_by_id("current-chapter") {
                el.set_text_content(Some(&view.zone_label));
            }
        }
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", display);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }
        log::info!("Skyhook starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let draw: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game::new(draw)));

        setup_input_handlers(game.clone())?;
        setup_zone_buttons(&document, game.clone())?;

        request_animation_frame(game);
        log::info!("Skyhook running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_event(&event, true);
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().key_event(&event, false);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Menu buttons `zone-1` .. `zone-3` start the matching zone
    fn setup_zone_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for zone in Zone::ALL {
            let Some(btn) = document.get_element_by_id(&format!("zone-{}", zone.number())) else {
                log::warn!("Missing button for zone {}", zone.number());
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    set_display(&document, "menu-screen", "none");
                    set_display(&document, "ui", "flex");
                }
                game.borrow_mut().start_zone(zone);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.ctx.is_playing() {
                tick_in_place(&mut g.ctx);
                let view = FrameView::capture(&g.ctx);
                g.render(&view);
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    g.update_hud(&document, &view);
                }
            }
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Skyhook (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    let zone = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .map(skyhook::Zone::try_from)
        .transpose();

    match zone {
        Ok(zone) => demo_run(zone.unwrap_or_default()),
        Err(e) => log::error!("{}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted run through a zone: settle, run right, swing from the nearest ledge
#[cfg(not(target_arch = "wasm32"))]
fn demo_run(zone: skyhook::Zone) {
    use skyhook::sim::{Action, InputEvent, SimContext, tick_in_place};
    use skyhook::{FrameView, Level, Tuning};

    let mut ctx = SimContext::new(Tuning::default());
    ctx.start_level(&Level::builtin(zone));

    let script: [(u64, InputEvent); 4] = [
        (30, InputEvent::Pressed(Action::MoveRight)),
        (60, InputEvent::Pressed(Action::Grapple)),
        (120, InputEvent::Released(Action::Grapple)),
        (150, InputEvent::Released(Action::MoveRight)),
    ];

    for frame in 0..240u64 {
        for (_, event) in script.iter().filter(|(at, _)| *at == frame) {
            ctx.handle_event(*event);
        }
        tick_in_place(&mut ctx);

        if frame % 30 == 0 {
            let view = FrameView::capture(&ctx);
            println!(
                "frame {:>3}  pos ({:>6.1}, {:>6.1})  grounded {:<5}  heat {}  speed {}  sky {}",
                frame,
                ctx.player.pos.x,
                ctx.player.pos.y,
                ctx.player.grounded,
                view.heat,
                view.speed,
                view.sky_css
            );
        }
    }
}
