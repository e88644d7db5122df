//! Movement domain: unit tests for the per-tick physics step.

use super::components::{Facing, Kinematics, Phase};
use super::resources::{DirectionalInput, StageTuning};
use super::systems::physics::{
    apply_horizontal, clamp_to_ground, probe_platforms, tick, PlatformSurface,
};

fn tuning() -> StageTuning {
    StageTuning::default()
}

fn no_input() -> DirectionalInput {
    DirectionalInput::default()
}

fn holding(up: bool, down: bool, left: bool, right: bool) -> DirectionalInput {
    DirectionalInput {
        up,
        down,
        left,
        right,
        ..Default::default()
    }
}

fn grounded_at(x: f32) -> Kinematics {
    Kinematics {
        x,
        ..Default::default()
    }
}

const NO_PLATFORMS: &[PlatformSurface] = &[];

#[test]
fn out_of_range_x_is_clamped_within_one_tick() {
    let t = tuning();

    let mut kin = grounded_at(130.0);
    tick(&mut kin, &no_input(), &t, t.jump_force, NO_PLATFORMS);
    assert_eq!(kin.x, 100.0);

    let mut kin = grounded_at(-12.0);
    tick(&mut kin, &no_input(), &t, t.jump_force, NO_PLATFORMS);
    assert_eq!(kin.x, 0.0);
}

#[test]
fn horizontal_step_is_half_speed_and_sets_facing() {
    let t = tuning();
    let mut kin = grounded_at(50.0);

    apply_horizontal(&mut kin, &holding(false, false, true, false), &t);
    assert_eq!(kin.x, 50.0 - t.speed / 2.0);
    assert_eq!(kin.facing, Facing::Left);

    apply_horizontal(&mut kin, &holding(false, false, false, true), &t);
    assert_eq!(kin.x, 50.0);
    assert_eq!(kin.facing, Facing::Right);
}

#[test]
fn jump_applies_force_and_goes_airborne() {
    let t = tuning();
    let mut kin = grounded_at(50.0);

    tick(&mut kin, &holding(true, false, false, false), &t, t.jump_force, NO_PLATFORMS);
    assert_eq!(kin.vel_y, t.jump_force);
    assert_eq!(kin.phase, Phase::Airborne);
    assert_eq!(kin.y, t.jump_force);
}

#[test]
fn jump_is_ignored_while_airborne() {
    let t = tuning();
    let mut kin = Kinematics {
        y: 10.0,
        vel_y: 1.0,
        phase: Phase::Airborne,
        ..Default::default()
    };

    tick(&mut kin, &holding(true, false, false, false), &t, t.jump_force, NO_PLATFORMS);
    // Gravity applied, no fresh impulse.
    assert_eq!(kin.vel_y, 1.0 - t.gravity);
}

#[test]
fn compact_viewport_reduces_jump_force() {
    let t = tuning();
    assert_eq!(t.effective_jump_force(1280.0), t.jump_force);
    assert_eq!(t.effective_jump_force(480.0), t.jump_force_compact);
}

#[test]
fn jump_arc_rises_then_lands_exactly_on_the_ground() {
    let t = tuning();
    let mut kin = grounded_at(50.0);

    // One tick of Up, then released.
    tick(&mut kin, &holding(true, false, false, false), &t, t.jump_force, NO_PLATFORMS);
    assert_eq!(kin.phase, Phase::Airborne);

    let mut apex = kin.y;
    let mut ticks = 0;
    while kin.phase == Phase::Airborne {
        tick(&mut kin, &no_input(), &t, t.jump_force, NO_PLATFORMS);
        apex = apex.max(kin.y);
        // The ground clamp repairs any would-be underflow within the
        // same tick, so y is never observably negative.
        assert!(kin.y >= 0.0);
        ticks += 1;
        assert!(ticks < 500, "character never landed");
    }

    assert!(apex > t.jump_force, "arc should rise past the first step");
    assert_eq!(kin.y, 0.0);
    assert_eq!(kin.vel_y, 0.0);
    assert_eq!(kin.phase, Phase::Grounded);
}

#[test]
fn ground_clamp_restores_full_state_in_one_call() {
    let mut kin = Kinematics {
        y: -3.0,
        vel_y: -2.5,
        phase: Phase::Airborne,
        ..Default::default()
    };
    clamp_to_ground(&mut kin);
    assert_eq!(kin.y, 0.0);
    assert_eq!(kin.vel_y, 0.0);
    assert_eq!(kin.phase, Phase::Grounded);
}

#[test]
fn falling_character_snaps_onto_a_platform() {
    let t = tuning();
    let platform = PlatformSurface {
        left: 66.0,
        right: 78.0,
        top: 19.0,
    };
    let mut kin = Kinematics {
        x: 72.0,
        y: 30.0,
        phase: Phase::Airborne,
        ..Default::default()
    };

    let mut ticks = 0;
    while kin.phase == Phase::Airborne {
        tick(&mut kin, &no_input(), &t, t.jump_force, &[platform]);
        ticks += 1;
        assert!(ticks < 500, "character never landed on the platform");
    }

    assert_eq!(kin.y, platform.top);
    assert_eq!(kin.vel_y, 0.0);
    assert_eq!(kin.phase, Phase::Grounded);
}

#[test]
fn platform_landing_is_idempotent_across_idle_ticks() {
    let t = tuning();
    let platform = PlatformSurface {
        left: 66.0,
        right: 78.0,
        top: 19.0,
    };
    let mut kin = Kinematics {
        x: 72.0,
        y: 19.0,
        ..Default::default()
    };

    for _ in 0..10 {
        tick(&mut kin, &no_input(), &t, t.jump_force, &[platform]);
        assert_eq!(kin.y, platform.top);
        assert_eq!(kin.vel_y, 0.0);
        assert_eq!(kin.phase, Phase::Grounded);
    }
}

#[test]
fn probe_never_snaps_a_rising_character() {
    let t = tuning();
    let platform = PlatformSurface {
        left: 66.0,
        right: 78.0,
        top: 19.0,
    };
    let mut kin = Kinematics {
        x: 72.0,
        y: 15.0,
        vel_y: 2.0,
        phase: Phase::Airborne,
        ..Default::default()
    };

    // While moving upward the probe must not fire, even inside the
    // tolerance band.
    while kin.vel_y > 0.0 {
        let snapped = probe_platforms(&mut kin, &[platform], &t);
        assert!(!snapped);
        tick(&mut kin, &no_input(), &t, t.jump_force, &[platform]);
        assert_eq!(kin.phase, Phase::Airborne);
    }
    assert!(kin.y > platform.top, "should have risen through the platform");
}

#[test]
fn probe_requires_horizontal_overlap() {
    let t = tuning();
    let platform = PlatformSurface {
        left: 66.0,
        right: 78.0,
        top: 19.0,
    };
    let mut kin = Kinematics {
        x: 40.0,
        y: 19.0,
        vel_y: -0.5,
        phase: Phase::Airborne,
        ..Default::default()
    };
    assert!(!probe_platforms(&mut kin, &[platform], &t));
}

#[test]
fn walking_off_a_platform_starts_a_fall() {
    let t = tuning();
    let platform = PlatformSurface {
        left: 66.0,
        right: 78.0,
        top: 19.0,
    };
    let mut kin = Kinematics {
        x: 77.0,
        y: 19.0,
        ..Default::default()
    };

    // Walk right until clear of the platform, then keep ticking.
    for _ in 0..30 {
        tick(&mut kin, &holding(false, false, false, true), &t, t.jump_force, &[platform]);
    }
    assert!(kin.y < platform.top);
}

#[test]
fn crouch_needs_ground_and_down() {
    let t = tuning();

    let mut kin = grounded_at(50.0);
    tick(&mut kin, &holding(false, true, false, false), &t, t.jump_force, NO_PLATFORMS);
    assert!(kin.crouching);

    tick(&mut kin, &no_input(), &t, t.jump_force, NO_PLATFORMS);
    assert!(!kin.crouching);

    let mut kin = Kinematics {
        y: 20.0,
        phase: Phase::Airborne,
        ..Default::default()
    };
    tick(&mut kin, &holding(false, true, false, false), &t, t.jump_force, NO_PLATFORMS);
    assert!(!kin.crouching);
}

#[test]
fn swipe_pulses_count_as_held_directions() {
    let input = DirectionalInput {
        up_pulse: 0.1,
        down_pulse: 0.2,
        ..Default::default()
    };
    assert!(input.up_held());
    assert!(input.down_held());

    let input = DirectionalInput::default();
    assert!(!input.up_held());
    assert!(!input.down_held());
}

#[test]
fn a_held_swipe_fires_exactly_one_pulse() {
    use super::systems::input::{latch_swipe, vertical_swipe, VerticalSwipe};

    assert_eq!(vertical_swipe(-60.0), Some(VerticalSwipe::Up));
    assert_eq!(vertical_swipe(60.0), Some(VerticalSwipe::Down));
    assert_eq!(vertical_swipe(20.0), None);

    let mut fired = Vec::new();
    assert!(latch_swipe(&mut fired, 7));
    // The same touch held past the threshold on later frames stays
    // latched; a fresh gesture fires again.
    assert!(!latch_swipe(&mut fired, 7));
    assert!(!latch_swipe(&mut fired, 7));
    assert!(latch_swipe(&mut fired, 8));
}

#[test]
fn riding_phases_report_riding() {
    use super::components::{PipeRide, WarpRide};

    assert!(!Phase::Grounded.is_riding());
    assert!(!Phase::Airborne.is_riding());
    assert!(Phase::EnteringPipe(PipeRide::default()).is_riding());
    assert!(Phase::ExitingPipe(PipeRide::default()).is_riding());
    assert!(Phase::Warping(WarpRide::default()).is_riding());
}
