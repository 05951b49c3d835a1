//! Per-frame update pipeline
//!
//! A tick is a fixed sequence of stages, each a plain function from context
//! to context: integrate, collide, cool, advance the sky. Grapple forces are
//! part of integration. Outside `GameMode::Playing` a tick changes nothing.

use super::collision::resolve_landing;
use super::state::{GameMode, SimContext};

/// One pipeline stage
pub type Stage = fn(SimContext) -> SimContext;

/// Stages in execution order
pub const PIPELINE: [(&str, Stage); 4] = [
    ("integrate", integrate),
    ("collide", collide),
    ("cool", cool),
    ("advance_sky", advance_sky),
];

/// Player kinematics, including grapple spring forces while attached
pub fn integrate(mut ctx: SimContext) -> SimContext {
    ctx.player = ctx.player.integrated(&ctx.input, &ctx.tuning);
    ctx
}

/// Land on platform tops and recompute `grounded`
pub fn collide(mut ctx: SimContext) -> SimContext {
    ctx.player = resolve_landing(ctx.player, &ctx.world);
    ctx
}

/// Passive heat decay
pub fn cool(mut ctx: SimContext) -> SimContext {
    ctx.heat = ctx.heat.decayed(ctx.tuning.heat_decay);
    ctx
}

pub fn advance_sky(mut ctx: SimContext) -> SimContext {
    ctx.sky = ctx.sky.advanced(ctx.tuning.sky_rate, ctx.tuning.sky_period);
    ctx
}

/// Advance the context by one frame
pub fn tick(ctx: SimContext) -> SimContext {
    if ctx.mode != GameMode::Playing {
        return ctx;
    }

    let mut ctx = PIPELINE.iter().fold(ctx, |ctx, (_, stage)| stage(ctx));
    ctx.time_ticks += 1;
    ctx
}

/// `tick` for a context the caller keeps behind a mutable reference
pub fn tick_in_place(ctx: &mut SimContext) {
    *ctx = tick(std::mem::take(ctx));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Level, Zone};
    use crate::sim::input::{Action, InputEvent};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing() -> SimContext {
        let mut ctx = SimContext::new(Tuning::default());
        ctx.start_level(&Level::builtin(Zone::Dawn));
        ctx
    }

    #[test]
    fn test_pipeline_order() {
        let names: Vec<&str> = PIPELINE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["integrate", "collide", "cool", "advance_sky"]);
    }

    #[test]
    fn test_menu_tick_is_noop() {
        let ctx = SimContext::new(Tuning::default());
        let before = ctx.clone();
        let after = tick(ctx);
        assert_eq!(after.player, before.player);
        assert_eq!(after.sky, before.sky);
        assert_eq!(after.time_ticks, 0);
    }

    #[test]
    fn test_player_settles_on_floor() {
        let mut ctx = playing();
        for _ in 0..60 {
            tick_in_place(&mut ctx);
        }
        assert!(ctx.player.grounded);
        assert_eq!(ctx.player.pos.y, 340.0);
        assert_eq!(ctx.player.vel.y, 0.0);
        assert_eq!(ctx.time_ticks, 60);
    }

    #[test]
    fn test_heat_and_sky_advance_each_tick() {
        let mut ctx = playing();
        for _ in 0..3 {
            ctx.activate_grapple();
        }
        ctx.release_grapple();
        assert_eq!(ctx.heat.value(), 6.0);

        for _ in 0..100 {
            tick_in_place(&mut ctx);
        }
        assert!((ctx.heat.value() - 5.0).abs() < 1e-9);
        assert_eq!(ctx.heat.display(), 5);
        assert!((ctx.sky.phase() - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_jump_from_floor() {
        let mut ctx = playing();
        for _ in 0..60 {
            tick_in_place(&mut ctx);
        }
        ctx.handle_event(InputEvent::Pressed(Action::Jump));
        tick_in_place(&mut ctx);
        assert!(!ctx.player.grounded);
        assert_eq!(ctx.player.vel.y, -11.5);
        assert_eq!(ctx.player.pos.y, 328.5);
    }

    #[test]
    fn test_held_jump_refires_on_landing() {
        let mut ctx = playing();
        for _ in 0..60 {
            tick_in_place(&mut ctx);
        }
        ctx.handle_event(InputEvent::Pressed(Action::Jump));

        let mut jumps = 0;
        for _ in 0..200 {
            let was_grounded = ctx.player.grounded;
            tick_in_place(&mut ctx);
            if was_grounded && ctx.player.vel.y < 0.0 {
                jumps += 1;
            }
        }
        assert!(jumps >= 2, "held jump should re-fire, got {}", jumps);
    }

    #[test]
    fn test_grapple_swing_pulls_toward_anchor() {
        let mut ctx = playing();
        ctx.handle_event(InputEvent::Pressed(Action::Grapple));
        let anchor = ctx.player.grapple.anchor().unwrap();
        let start = (anchor - ctx.player.pos).length();

        for _ in 0..10 {
            tick_in_place(&mut ctx);
        }
        assert!(ctx.player.grapple.is_attached());
        assert!((anchor - ctx.player.pos).length() < start);
        assert!(ctx.player.vel.x > 0.0);
        assert_eq!(ctx.player.grapple.anchor(), Some(Vec2::new(375.0, 220.0)));
    }

    #[test]
    fn test_release_restores_locomotion() {
        let mut ctx = playing();
        ctx.handle_event(InputEvent::Pressed(Action::Grapple));
        tick_in_place(&mut ctx);
        ctx.handle_event(InputEvent::Released(Action::Grapple));
        ctx.handle_event(InputEvent::Pressed(Action::MoveLeft));
        let vx = ctx.player.vel.x;
        tick_in_place(&mut ctx);
        assert!((ctx.player.vel.x - (vx - 0.8) * 0.94).abs() < 1e-5);
    }

    #[test]
    fn test_determinism() {
        let script = [
            InputEvent::Pressed(Action::MoveRight),
            InputEvent::Pressed(Action::Grapple),
            InputEvent::Released(Action::Grapple),
            InputEvent::Pressed(Action::Jump),
        ];

        let mut a = playing();
        let mut b = playing();
        for event in script {
            a.handle_event(event);
            b.handle_event(event);
            for _ in 0..15 {
                tick_in_place(&mut a);
                tick_in_place(&mut b);
            }
        }

        assert_eq!(a.player, b.player);
        assert_eq!(a.heat, b.heat);
        assert_eq!(a.sky, b.sky);
    }
}
