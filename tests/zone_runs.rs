use skyhook::sim::{
    Action, GameMode, Grapple, InputEvent, SimContext, SkyColor, tick, tick_in_place,
};
use skyhook::{FrameView, Level, Tuning, Zone};

fn start(zone: Zone) -> SimContext {
    let mut ctx = SimContext::new(Tuning::default());
    ctx.start_level(&Level::builtin(zone));
    ctx
}

#[test]
fn menu_context_never_advances() {
    let mut ctx = SimContext::new(Tuning::default());
    ctx.handle_event(InputEvent::Pressed(Action::MoveRight));
    for _ in 0..50 {
        ctx = tick(ctx);
    }
    assert_eq!(ctx.mode, GameMode::Menu);
    assert_eq!(ctx.time_ticks, 0);
    assert_eq!(ctx.player.pos.x, 100.0);
}

#[test]
fn run_right_then_stop_coasts_to_rest() {
    let mut ctx = start(Zone::Dawn);
    ctx.handle_event(InputEvent::Pressed(Action::MoveRight));
    for _ in 0..40 {
        tick_in_place(&mut ctx);
    }
    let top_speed = ctx.player.vel.x;
    assert!(top_speed > 10.0);

    ctx.handle_event(InputEvent::Released(Action::MoveRight));
    let mut prev = ctx.player.vel.x;
    for _ in 0..200 {
        tick_in_place(&mut ctx);
        assert!(ctx.player.vel.x <= prev);
        prev = ctx.player.vel.x;
    }
    assert!(ctx.player.vel.x < 0.01);
    assert!(ctx.player.grounded);
    assert_eq!(FrameView::capture(&ctx).speed, 0);
}

#[test]
fn grapple_swing_heat_round_trip() {
    let mut ctx = start(Zone::Dawn);

    ctx.handle_event(InputEvent::Pressed(Action::Grapple));
    assert!(ctx.player.grapple.is_attached());
    assert_eq!(FrameView::capture(&ctx).heat, 2);

    for _ in 0..20 {
        tick_in_place(&mut ctx);
    }
    ctx.handle_event(InputEvent::Released(Action::Grapple));
    assert_eq!(ctx.player.grapple, Grapple::Idle);
    assert!(FrameView::capture(&ctx).grapple_line.is_none());

    // 2.0 heat at 0.01 per tick is gone after 200 more ticks
    for _ in 0..200 {
        tick_in_place(&mut ctx);
    }
    assert_eq!(ctx.heat.value(), 0.0);
}

#[test]
fn empty_level_free_falls_without_error() {
    let mut ctx = SimContext::new(Tuning::default());
    ctx.start_level(&Level::from_json(r#"{ "zone": 3, "platforms": [] }"#).unwrap());
    ctx.handle_event(InputEvent::Pressed(Action::Grapple));
    assert_eq!(ctx.heat.value(), 0.0);
    assert_eq!(ctx.player.grapple, Grapple::Idle);

    let mut last_y = ctx.player.pos.y;
    for _ in 0..120 {
        tick_in_place(&mut ctx);
        assert!(!ctx.player.grounded);
        assert!(ctx.player.pos.y > last_y);
        last_y = ctx.player.pos.y;
    }
}

#[test]
fn sky_wraps_back_to_day() {
    let mut ctx = start(Zone::Midnight);
    // 1.2 -> past 2.0 takes 1601 ticks at 0.0005
    for _ in 0..1700 {
        tick_in_place(&mut ctx);
    }
    assert!(ctx.sky.phase() < 0.1);

    let mut ctx = start(Zone::Dawn);
    assert_eq!(FrameView::capture(&ctx).sky, SkyColor::DAY);
    for _ in 0..2000 {
        tick_in_place(&mut ctx);
    }
    let sunset = FrameView::capture(&ctx).sky;
    assert!(sunset.r >= 254 && sunset.g <= 96);
}

#[test]
fn custom_tuning_flows_into_ticks() {
    let tuning = Tuning::from_json_or_default(r#"{ "gravity": 1.0, "heat_decay": 0.5 }"#);
    let mut ctx = SimContext::new(tuning);
    ctx.start_level(&Level::builtin(Zone::Dawn));
    ctx.activate_grapple();
    ctx.release_grapple();

    tick_in_place(&mut ctx);
    assert_eq!(ctx.player.vel.y, 1.0);
    assert_eq!(ctx.heat.value(), 1.5);
}

#[test]
fn longer_sky_period_blends_toward_night() {
    let tuning = Tuning::from_json_or_default(r#"{ "sky_period": 4.0 }"#);
    let mut ctx = SimContext::new(tuning);
    ctx.start_level(&Level::builtin(Zone::Dawn));
    for _ in 0..6000 {
        tick_in_place(&mut ctx);
    }
    // Phase ~3.0 of 4.0: halfway from sunset to night
    assert!((ctx.sky.phase() - 3.0).abs() < 0.01);
    let sky = FrameView::capture(&ctx).sky;
    assert!(sky.r > 120 && sky.r < 145, "{:?}", sky);
    assert!(sky.b > 60 && sky.b < 80, "{:?}", sky);
}
