//! Interactions domain: unit tests for geometry, one-shot guards, and
//! the staged rides.

use super::components::{Collectible, CollectibleKind, ItemBlock};
use super::geometry::{
    character_hitbox, character_rect, classify_contact, ContactSide, Rect,
};
use super::systems::{block_bump_eligible, pipe_entry_eligible};
use super::transitions::{
    tick_pipe_entry, tick_pipe_exit, tick_warp, PIPE_EXIT_RISE_SECS, PIPE_RIDE_SECS,
    PIPE_SQUASH_SECS, WARP_NAVIGATE_SECS,
};
use crate::movement::{Kinematics, Phase, PipeRide, Stature, WarpRide};

fn block_rect() -> Rect {
    // A 5x5 block whose bottom edge sits at 14.
    Rect::from_bottom_center(30.0, 14.0, 5.0, 5.0)
}

fn character_at(x: f32, y: f32) -> Kinematics {
    Kinematics {
        x,
        y,
        ..Default::default()
    }
}

#[test]
fn hitbox_shrinks_width_and_is_top_biased() {
    let visual = Rect::from_bottom_center(50.0, 0.0, 6.0, 8.0);
    let hitbox = character_hitbox(&visual);

    // 40% narrower, split across both sides.
    assert!((hitbox.left - 48.2).abs() < 1e-4);
    assert!((hitbox.right - 51.8).abs() < 1e-4);
    // 20% shorter, most of it taken off the top.
    assert!((hitbox.bottom - 0.4).abs() < 1e-4);
    assert!((hitbox.top - 6.8).abs() < 1e-4);
}

#[test]
fn disjoint_rects_have_no_contact() {
    let a = Rect::from_bottom_center(10.0, 0.0, 4.0, 4.0);
    let b = Rect::from_bottom_center(20.0, 0.0, 4.0, 4.0);
    assert!(!a.overlaps(&b));
    assert_eq!(classify_contact(&a, &b), None);
}

#[test]
fn contact_from_below_classifies_as_bottom() {
    let hitbox = character_hitbox(&character_rect(&character_at(30.0, 8.0)));
    assert_eq!(classify_contact(&hitbox, &block_rect()), Some(ContactSide::Bottom));
}

#[test]
fn contact_from_above_classifies_as_top() {
    let hitbox = character_hitbox(&character_rect(&character_at(30.0, 18.0)));
    assert_eq!(classify_contact(&hitbox, &block_rect()), Some(ContactSide::Top));
}

#[test]
fn shallow_horizontal_contact_classifies_as_side() {
    let hitbox = character_hitbox(&character_rect(&character_at(26.0, 14.0)));
    assert_eq!(classify_contact(&hitbox, &block_rect()), Some(ContactSide::Side));
}

#[test]
fn bump_eligibility_gates_on_side_and_velocity() {
    let from_below = character_hitbox(&character_rect(&character_at(30.0, 8.0)));
    let tolerance = 0.5;

    // Rising or near-stationary from below: eligible.
    assert!(block_bump_eligible(&from_below, &block_rect(), 2.0, tolerance));
    assert!(block_bump_eligible(&from_below, &block_rect(), -0.2, tolerance));
    // Falling fast: not a bump.
    assert!(!block_bump_eligible(&from_below, &block_rect(), -1.5, tolerance));
    // Standing on top: never a bump.
    let from_above = character_hitbox(&character_rect(&character_at(30.0, 18.0)));
    assert!(!block_bump_eligible(&from_above, &block_rect(), 0.0, tolerance));
}

#[test]
fn item_block_exhausts_exactly_once() {
    let mut block = ItemBlock::new(Some("super-shroom".to_string()));
    assert!(block.try_exhaust());
    for _ in 0..5 {
        assert!(!block.try_exhaust());
    }
    assert!(block.exhausted);
}

#[test]
fn collectible_requires_reveal_and_collects_once() {
    let mut collectible = Collectible {
        id: "super-shroom".to_string(),
        kind: CollectibleKind::PowerUp,
        revealed: false,
        collected: false,
    };

    // Hidden collectibles cannot be picked up.
    assert!(!collectible.try_collect());

    collectible.revealed = true;
    assert!(collectible.try_collect());
    for _ in 0..5 {
        assert!(!collectible.try_collect());
    }
}

#[test]
fn pickups_replace_each_other() {
    assert_eq!(CollectibleKind::PowerUp.stature(), Stature::Grown);
    assert_eq!(CollectibleKind::Hazard.stature(), Stature::Shrunk);
    // A later pickup overwrites the previous state outright; the two
    // effects never stack.
    let mut kin = Kinematics::default();
    kin.stature = CollectibleKind::Hazard.stature();
    kin.stature = CollectibleKind::PowerUp.stature();
    assert_eq!(kin.stature, Stature::Grown);
}

#[test]
fn warp_guard_is_one_shot() {
    let mut phase = Phase::Grounded;
    assert!(phase.begin_warp());
    // A second overlap mid-ride changes nothing.
    assert!(!phase.begin_warp());
    assert!(matches!(phase, Phase::Warping(_)));
}

#[test]
fn warp_can_start_from_the_air() {
    let mut phase = Phase::Airborne;
    assert!(phase.begin_warp());
}

#[test]
fn warp_navigation_fires_exactly_once() {
    let mut ride = WarpRide::default();
    let mut navigations = 0;
    let mut fired_at = 0.0;

    for _ in 0..20 {
        let frame = tick_warp(&mut ride, 0.1);
        if frame.navigate {
            navigations += 1;
            fired_at = ride.elapsed;
        }
    }

    assert_eq!(navigations, 1);
    assert!(fired_at >= WARP_NAVIGATE_SECS);
    assert!(fired_at < WARP_NAVIGATE_SECS + 0.2);
}

#[test]
fn warp_shrinks_spins_and_fades_by_the_half_second() {
    let mut ride = WarpRide::default();
    let frame = tick_warp(&mut ride, 0.5);
    assert!((frame.scale - 0.1).abs() < 1e-3);
    assert!(frame.alpha.abs() < 1e-3);
    assert!(frame.spin > 0.0);
}

#[test]
fn pipe_guard_requires_grounded_and_is_one_shot() {
    let mut phase = Phase::Airborne;
    assert!(!phase.begin_pipe_entry());

    let mut phase = Phase::Grounded;
    assert!(phase.begin_pipe_entry());
    assert!(!phase.begin_pipe_entry());
    assert!(matches!(phase, Phase::EnteringPipe(_)));
}

#[test]
fn pipe_entry_eligibility_matrix() {
    let tolerance = 4.0;
    let pipe_x = 72.0;
    let grounded = Phase::Grounded;

    assert!(pipe_entry_eligible(72.0, pipe_x, tolerance, true, 0.0, &grounded));
    assert!(pipe_entry_eligible(75.5, pipe_x, tolerance, true, 0.5, &grounded));
    // Misaligned.
    assert!(!pipe_entry_eligible(80.0, pipe_x, tolerance, true, 0.0, &grounded));
    // Down not held.
    assert!(!pipe_entry_eligible(72.0, pipe_x, tolerance, false, 0.0, &grounded));
    // Moving too fast vertically.
    assert!(!pipe_entry_eligible(72.0, pipe_x, tolerance, true, 1.5, &grounded));
    // Mid-air or mid-ride.
    assert!(!pipe_entry_eligible(72.0, pipe_x, tolerance, true, 0.0, &Phase::Airborne));
    assert!(!pipe_entry_eligible(
        72.0,
        pipe_x,
        tolerance,
        true,
        0.0,
        &Phase::EnteringPipe(PipeRide::default())
    ));
}

#[test]
fn pipe_entry_squashes_before_it_slides() {
    let mut ride = PipeRide::default();

    // During the squash stage nothing has sunk yet.
    let frame = tick_pipe_entry(&mut ride, PIPE_SQUASH_SECS / 2.0);
    assert!(frame.squash < 1.0);
    assert_eq!(frame.sink, 0.0);
    assert!(!frame.done);

    // Finish the squash, then slide.
    let frame = tick_pipe_entry(&mut ride, PIPE_SQUASH_SECS / 2.0);
    assert!((frame.squash - 0.65).abs() < 1e-3);

    let frame = tick_pipe_entry(&mut ride, PIPE_RIDE_SECS);
    assert!(frame.done);
    assert!(frame.sink > 0.0);
}

#[test]
fn pipe_exit_rises_then_unsquashes() {
    let mut ride = PipeRide::default();

    let first = tick_pipe_exit(&mut ride, 0.01);
    assert!((first.squash - 0.65).abs() < 1e-2);
    assert!(first.sink > 0.0);

    let mut ride = PipeRide::default();
    let risen = tick_pipe_exit(&mut ride, PIPE_EXIT_RISE_SECS);
    assert!(risen.sink.abs() < 1e-3);
    assert!(risen.squash < 1.0);
    assert!(!risen.done);

    let done = tick_pipe_exit(&mut ride, PIPE_RIDE_SECS);
    assert!(done.done);
    assert!((done.squash - 1.0).abs() < 1e-3);
}

#[test]
fn pipe_descent_ends_grounded_at_the_floor() {
    let mut kin = Kinematics {
        x: 72.0,
        y: 14.0,
        vel_y: 0.2,
        ..Default::default()
    };
    assert!(kin.phase.begin_pipe_entry());

    let Phase::EnteringPipe(mut ride) = kin.phase else {
        panic!("descent did not start");
    };
    let mut ticks = 0;
    loop {
        let frame = tick_pipe_entry(&mut ride, 0.05);
        if frame.done {
            break;
        }
        ticks += 1;
        assert!(ticks < 100, "descent never finished");
    }
    kin.settle_at(0.0);

    assert_eq!(kin.y, 0.0);
    assert_eq!(kin.vel_y, 0.0);
    assert_eq!(kin.phase, Phase::Grounded);
}

#[test]
fn pipe_exit_ends_standing_on_the_pipe_top() {
    let pipe_top = 14.0;
    let mut kin = Kinematics {
        x: 72.0,
        ..Default::default()
    };
    assert!(kin.phase.begin_pipe_exit());

    let Phase::ExitingPipe(mut ride) = kin.phase else {
        panic!("exit did not start");
    };
    let mut ticks = 0;
    loop {
        let frame = tick_pipe_exit(&mut ride, 0.05);
        if frame.done {
            break;
        }
        ticks += 1;
        assert!(ticks < 100, "exit never finished");
    }
    kin.settle_at(pipe_top);

    assert_eq!(kin.y, pipe_top);
    assert_eq!(kin.vel_y, 0.0);
    assert_eq!(kin.phase, Phase::Grounded);
}

#[test]
fn ride_phases_suspend_normal_physics() {
    let kin = Kinematics {
        phase: Phase::Warping(WarpRide::default()),
        ..Default::default()
    };
    assert!(kin.phase.is_riding());

    let kin = Kinematics {
        phase: Phase::ExitingPipe(PipeRide::default()),
        ..Default::default()
    };
    assert!(kin.phase.is_riding());
}
