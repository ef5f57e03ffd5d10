//! Integration tests for the editor core.
//!
//! These drive the public API the way the windowed app does: pointer events
//! and pointer state in, frame reports and pixels out.

use glam::{Vec2, Vec3};
use pfx::force;
use pfx::input::{MouseButton, PointerEvent, PointerKind, PointerState};
use pfx::prelude::*;

fn editor() -> Editor {
    Editor::new(EditorSettings {
        seed: Some(2024),
        ..Default::default()
    })
}

fn held(pos: Vec2) -> PointerState {
    PointerState {
        pos,
        primary_held: true,
        secondary_held: false,
    }
}

fn idle() -> PointerState {
    PointerState::default()
}

/// Press at `from`, move to `to`, release at `to`, as one frame.
fn drag(editor: &mut Editor, from: Vec2, to: Vec2) -> FrameReport {
    editor.frame(
        &[
            PointerEvent::down(from),
            PointerEvent::moved(to),
            PointerEvent::up(to),
        ],
        &idle(),
    )
}

// ============================================================================
// Spawn gating
// ============================================================================

#[test]
fn test_spawn_rate_five_on_canvas() {
    let mut e = editor();
    let report = e.frame(&[], &held(Vec2::new(700.0, 450.0)));
    assert_eq!(report.spawned, 5);
}

#[test]
fn test_no_spawn_inside_any_window() {
    let mut e = editor();
    for pos in [
        Vec2::new(100.0, 100.0), // EMITTER: SPAWN
        Vec2::new(100.0, 600.0), // PARTICLE: COLOR
        Vec2::new(400.0, 100.0), // FORCES
    ] {
        assert_eq!(e.frame(&[], &held(pos)).spawned, 0, "at {pos}");
    }
    assert!(e.particles().is_empty());
}

#[test]
fn test_spawn_rate_follows_slider() {
    let mut e = editor();
    // Spawn Rate track in EMITTER: SPAWN spans x [40, 240), y [70, 80).
    drag(&mut e, Vec2::new(140.0, 75.0), Vec2::new(240.0, 75.0));
    assert_eq!(e.param(Param::SpawnRate), 20.0);

    let report = e.frame(&[], &held(Vec2::new(700.0, 450.0)));
    assert_eq!(report.spawned, 20);
}

#[test]
fn test_moved_window_gates_new_area() {
    let mut e = editor();
    // Drag EMITTER: SPAWN by its title bar so it covers (700, 450).
    drag(&mut e, Vec2::new(100.0, 30.0), Vec2::new(680.0, 440.0));
    assert_eq!(e.stack().top().unwrap().title(), "EMITTER: SPAWN");
    assert_eq!(e.frame(&[], &held(Vec2::new(700.0, 450.0))).spawned, 0);

    // Its old spot is bare canvas now.
    assert_eq!(e.frame(&[], &held(Vec2::new(100.0, 100.0))).spawned, 5);
}

// ============================================================================
// Focus and z-order
// ============================================================================

#[test]
fn test_focus_moves_window_to_top() {
    let mut e = editor();
    e.frame(&[PointerEvent::down(Vec2::new(100.0, 190.0))], &idle());
    assert_eq!(
        e.stack().titles(),
        vec![
            "EMITTER: SPAWN",
            "PARTICLE: UPDATE",
            "PARTICLE: COLOR",
            "FORCES",
            "PARTICLE: INIT",
        ]
    );
}

#[test]
fn test_top_window_shields_slider_below() {
    let mut e = editor();
    // Put FORCES over the Spawn Rate slider of EMITTER: SPAWN.
    drag(&mut e, Vec2::new(300.0, 30.0), Vec2::new(30.0, 60.0));
    assert_eq!(e.stack().window_at(Vec2::new(140.0, 75.0)).unwrap().title(), "FORCES");

    let before = e.param(Param::SpawnRate);
    drag(&mut e, Vec2::new(140.0, 75.0), Vec2::new(240.0, 75.0));
    assert_eq!(e.param(Param::SpawnRate), before);
}

#[test]
fn test_release_outside_window_ends_drag() {
    let mut e = editor();
    e.frame(&[PointerEvent::down(Vec2::new(100.0, 30.0))], &idle());
    e.frame(&[PointerEvent::up(Vec2::new(900.0, 650.0))], &idle());
    assert!(e.stack().iter().all(|w| !w.is_dragging()));
}

#[test]
fn test_secondary_press_on_title_does_not_focus() {
    let mut e = editor();
    let before: Vec<String> = e.stack().titles().iter().map(|s| s.to_string()).collect();
    let press = PointerEvent::with_button(PointerKind::Down, Vec2::new(100.0, 30.0), MouseButton::Right);
    e.frame(&[press], &idle());
    assert_eq!(e.stack().titles(), before);
}

// ============================================================================
// Sliders
// ============================================================================

#[test]
fn test_slider_values_stay_in_range() {
    let mut e = editor();
    // Gravity track in PARTICLE: UPDATE spans x [40, 240), y [390, 400).
    for target in [-1000.0, 0.0, 40.0, 139.0, 240.0, 5000.0] {
        drag(&mut e, Vec2::new(140.0, 395.0), Vec2::new(target, 395.0));
        let g = e.param(Param::Gravity);
        assert!((-0.5..=0.5).contains(&g), "gravity {g} out of range");
    }
}

#[test]
fn test_color_sliders_feed_spawned_particles() {
    let mut e = editor();
    // End R track in PARTICLE: COLOR spans x [40, 240), y [630, 640).
    drag(&mut e, Vec2::new(140.0, 635.0), Vec2::new(40.0, 635.0));
    assert_eq!(e.param(Param::EndRed), 0.0);

    e.frame(&[], &held(Vec2::new(700.0, 450.0)));
    for p in e.particles() {
        assert_eq!(p.color_end, Vec3::new(0.0, 255.0, 100.0));
    }
}

// ============================================================================
// Lifetime
// ============================================================================

#[test]
fn test_no_dead_particle_survives_a_frame() {
    let mut e = editor();
    for frame in 0..200 {
        let pointer = if frame % 3 == 0 {
            held(Vec2::new(700.0, 450.0))
        } else {
            idle()
        };
        e.frame(&[], &pointer);
        assert!(e.particles().iter().all(|p| !p.is_dead()));
        assert!(e.particles().iter().all(|p| p.life <= p.max_life));
    }
}

#[test]
fn test_report_counts_balance() {
    let mut e = editor();
    let mut live = 0;
    for frame in 0..120 {
        let pointer = if frame < 30 {
            held(Vec2::new(700.0, 450.0))
        } else {
            idle()
        };
        let r = e.frame(&[], &pointer);
        live = live + r.spawned - r.removed;
        assert_eq!(r.live, live);
    }
    assert_eq!(live, 0);
}

// ============================================================================
// Forces
// ============================================================================

#[test]
fn test_friction_alone_converges() {
    let mut p = Particle::new(
        Vec2::ZERO,
        Vec2::new(3.0, -4.0),
        1000.0,
        1.0,
        Vec3::ZERO,
        Vec3::ZERO,
    );
    let mut last = p.velocity.length();
    for _ in 0..500 {
        p.update(0.0, 0.9);
        let speed = p.velocity.length();
        assert!(speed <= last);
        last = speed;
    }
    assert!(last < 1e-6);
}

#[test]
fn test_repel_radius_cutoff() {
    let make = |x: f32| Particle::new(Vec2::new(x, 0.0), Vec2::ZERO, 60.0, 1.0, Vec3::ZERO, Vec3::ZERO);

    let mut near = make(50.0);
    force::repel(&mut near, Vec2::ZERO, 1.0, 100.0);
    assert!(near.velocity.x > 0.0);

    let mut far = make(150.0);
    force::repel(&mut far, Vec2::ZERO, 1.0, 100.0);
    assert_eq!(far.velocity, Vec2::ZERO);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_windows_draw_over_particles() {
    let mut e = editor();
    // Spawn on the canvas, then drag a window over the particles.
    e.frame(&[], &held(Vec2::new(700.0, 450.0)));
    drag(&mut e, Vec2::new(300.0, 30.0), Vec2::new(600.0, 380.0));

    let mut canvas = Canvas::new(1100, 700);
    e.draw(&mut canvas);

    let inside = e.stack().window_at(Vec2::new(700.0, 450.0));
    assert_eq!(inside.unwrap().title(), "FORCES");
    // The particles sit in the body strip between the first two sliders.
    for p in e.particles() {
        let px = canvas.pixel(p.position.x as i32, p.position.y as i32);
        if e.stack().window_at(p.position).is_some() {
            assert_eq!(px, Some(pfx::ui::theme::WINDOW_BODY));
        }
    }
}

#[test]
fn test_overlay_counts_particles() {
    let mut e = editor();
    e.frame(&[], &held(Vec2::new(700.0, 450.0)));
    let mut canvas = Canvas::new(1100, 700);
    e.draw(&mut canvas);

    // Some counter text pixel lands inside the overlay box.
    let overlay = e.overlay_rect();
    let text_color = pfx::ui::theme::OVERLAY_TEXT;
    let mut found = false;
    for y in overlay.y as i32..(overlay.y + overlay.h) as i32 {
        for x in overlay.x as i32..(overlay.x + overlay.w) as i32 {
            found |= canvas.pixel(x, y) == Some(text_color);
        }
    }
    assert!(found);
}
