//! Scenario tests for the building encounter engine.

use campus_escape::{Encounter, EncounterEnd, EncounterTick, GameConfig, MoveIntent, WorldRect};

const W: f32 = 1200.0;
const H: f32 = 800.0;
const DT: f32 = 1.0 / 60.0;

fn encounter(health: i32, seed: u64) -> Encounter {
    Encounter::new("컨버전스홀", health, W, H, &GameConfig::default(), seed)
}

/// Parks the pursuer on the player and ticks once, expecting a hit.
fn force_hit(enc: &mut Encounter) -> EncounterTick {
    enc.pursuer.x = enc.player.x;
    enc.pursuer.y = enc.player.y;
    enc.tick(MoveIntent::none(), false, DT)
}

#[test]
fn test_three_collisions_from_full_health() {
    let mut enc = encounter(100, 1);
    let mut sequence = vec![enc.health()];

    for _ in 0..3 {
        match force_hit(&mut enc) {
            EncounterTick::Hit { remaining } => {
                sequence.push(remaining);
                // Pursuer repositioned somewhere in bounds.
                assert!(enc.pursuer.x >= 0.0 && enc.pursuer.x <= W - enc.pursuer.w);
                assert!(enc.pursuer.y >= 0.0 && enc.pursuer.y <= H - enc.pursuer.h);
            }
            other => panic!("expected a hit, got {other:?}"),
        }
        // Wait out the feedback pause before the next collision.
        enc.tick(MoveIntent::none(), false, 1.0);
    }

    assert_eq!(sequence, vec![100, 80, 60, 40]);
}

#[test]
fn test_fatal_first_collision_at_low_health() {
    let mut enc = encounter(15, 2);
    assert_eq!(force_hit(&mut enc), EncounterTick::Hit { remaining: 0 });
    // Never negative, always clamped.
    assert_eq!(enc.health(), 0);

    // Death banner holds, then the encounter reports the death.
    let mut done = None;
    for _ in 0..200 {
        if let EncounterTick::Done(end) = enc.tick(MoveIntent::none(), false, DT) {
            done = Some(end);
            break;
        }
    }
    assert_eq!(done, Some(EncounterEnd::Died));
    assert_eq!(EncounterEnd::Died.health(), 0);
}

#[test]
fn test_taxicab_pursuit_steps_are_not_normalized() {
    let mut enc = encounter(100, 3);
    enc.pursuer = WorldRect::new(100.0, 100.0, 120.0, 120.0);
    let (x0, y0) = (enc.pursuer.x, enc.pursuer.y);

    enc.tick(MoveIntent::none(), false, DT);

    // One full step on each axis toward the player, regardless of the
    // diagonal distance: taxicab, not Euclidean.
    assert_eq!(enc.pursuer.x, x0 + 2.0);
    assert_eq!(enc.pursuer.y, y0 + 2.0);
}

#[test]
fn test_escape_preserves_damaged_health() {
    let mut enc = encounter(100, 4);
    force_hit(&mut enc);
    enc.tick(MoveIntent::none(), false, 1.0);

    assert_eq!(
        enc.tick(MoveIntent::none(), true, DT),
        EncounterTick::Done(EncounterEnd::Escaped(80))
    );
}

#[test]
fn test_encounter_player_moves_in_fixed_steps() {
    let mut enc = encounter(100, 5);
    enc.pursuer = WorldRect::new(0.0, 0.0, 120.0, 120.0);
    let x0 = enc.player.x;

    let right = MoveIntent {
        right: true,
        ..Default::default()
    };
    enc.tick(right, false, DT);
    // Step size is fixed per frame, independent of dt.
    assert_eq!(enc.player.x, x0 + 5.0);

    enc.tick(right, false, DT * 10.0);
    assert_eq!(enc.player.x, x0 + 10.0);
}
