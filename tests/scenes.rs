//! Drive complete scenes through the frame loop without a browser.

use glam::Vec2;
use glamour::Size2;
use menagerie::{
    entity::{Crocodile, Entity, Fish, Flower},
    frame_loop::{FrameLoop, FrameOutcome},
    input::{PointerEvent, PointerPhase},
    math::Bounds,
    scene::{Background, Habitat, Scene},
    surface::{DrawCommand, Recorder},
    viewport::{Container, Viewport, ViewportConfig},
    Config, SceneKind,
};

/// Time between two refreshes, comfortably above the 60 FPS interval.
const STEP_MS: f64 = 20.0;

fn bounds() -> Bounds {
    Bounds::new(1200.0, 800.0)
}

#[test]
fn pick_move_release() {
    let fish = Fish::new(Vec2::new(300.0, 300.0))
        .with_size(20.0)
        .with_velocity(Vec2::new(0.5, 0.25));
    let mut pond = Habitat::new("pond", bounds(), Background::Swamp).with_entity(fish);

    pond.handle_pointer(PointerEvent::Down(Vec2::new(305.0, 305.0)));
    assert_eq!(pond.drag().held(), Some(0));

    // Moving relocates exactly to the pointer
    pond.handle_pointer(PointerEvent::Move(Vec2::new(640.0, 420.0)));
    assert_eq!(pond.entities()[0].position(), Vec2::new(640.0, 420.0));

    // Frames while holding don't move it
    let mut frame_loop = FrameLoop::new(pond, 60);
    let mut recorder = Recorder::new();
    for step in 1..10 {
        frame_loop.tick(f64::from(step) * STEP_MS, &mut recorder);
    }
    assert_eq!(
        frame_loop.scene().entities()[0].position(),
        Vec2::new(640.0, 420.0)
    );

    frame_loop.scene_mut().handle_pointer(PointerEvent::Up);
    assert!(!frame_loop.scene().drag().is_dragging());

    let Entity::Fish(fish) = &frame_loop.scene().entities()[0] else {
        panic!("Expected a fish");
    };
    assert!(fish.velocity() != Vec2::ZERO);
}

#[test]
fn cursor_ring_only_while_dragging() {
    let mut tank = Habitat::new("tank", bounds(), Background::Underwater)
        .with_entity(Fish::new(Vec2::new(100.0, 100.0)).with_size(20.0));
    let mut frame_loop_recorder = Recorder::new();

    tank.handle_pointer(PointerEvent::Down(Vec2::new(100.0, 100.0)));
    let mut frame_loop = FrameLoop::new(tank, 60);
    frame_loop.tick(STEP_MS, &mut frame_loop_recorder);
    assert_eq!(
        frame_loop_recorder.count(|command| matches!(command, DrawCommand::StrokeCircle { .. })),
        1
    );

    frame_loop.scene_mut().handle_pointer(PointerEvent::Up);
    frame_loop_recorder.clear();
    frame_loop.tick(STEP_MS * 2.0, &mut frame_loop_recorder);
    assert_eq!(
        frame_loop_recorder.count(|command| matches!(command, DrawCommand::StrokeCircle { .. })),
        0
    );
}

#[test]
fn stopped_loop_draws_nothing() {
    let config = Config::default();
    let mut frame_loop = FrameLoop::new(SceneKind::FishTank.build(&config), config.target_fps);
    let handle = frame_loop.stop_handle();
    let mut recorder = Recorder::new();

    assert_eq!(frame_loop.tick(STEP_MS, &mut recorder), FrameOutcome::Rendered);
    let before = frame_loop.scene().clone();

    handle.stop();
    recorder.clear();
    for step in 2..50 {
        assert_eq!(
            frame_loop.tick(f64::from(step) * STEP_MS, &mut recorder),
            FrameOutcome::Stopped
        );
    }

    assert!(recorder.is_empty());
    assert_eq!(frame_loop.scene(), &before);
}

#[test]
fn every_scene_stays_inside_bounds() {
    let config = Config::default();

    for kind in SceneKind::ALL {
        let mut frame_loop = FrameLoop::new(kind.build(&config), config.target_fps);
        let mut recorder = Recorder::new();

        for step in 1..=600 {
            recorder.clear();
            frame_loop.tick(f64::from(step) * STEP_MS, &mut recorder);

            // Every save must be restored within a frame
            assert_eq!(recorder.depth(), 0, "{kind}");

            let bounds = frame_loop.scene().bounds();
            for entity in frame_loop.scene().entities() {
                assert!(
                    bounds.contains(entity.position()),
                    "{} in {kind} left the bounds at {}",
                    entity.name(),
                    entity.position()
                );
            }
        }

        assert_eq!(frame_loop.frames(), 600);
    }
}

#[test]
fn entities_are_drawn_after_the_background() {
    let config = Config::default();
    let mut frame_loop = FrameLoop::new(SceneKind::FlowerField.build(&config), 60);
    let mut recorder = Recorder::new();

    frame_loop.tick(STEP_MS, &mut recorder);

    let commands = recorder.commands();
    assert!(matches!(commands[0], DrawCommand::ClearRect { .. }));
    assert!(matches!(
        commands[1],
        DrawCommand::FillVerticalGradient { .. }
    ));
}

#[test]
fn crocodile_snaps_when_picked() {
    let crocodile = Crocodile::new(Vec2::new(600.0, 600.0)).with_size(70.0);
    let mut pond = Habitat::new("pond", bounds(), Background::Swamp).with_entity(crocodile);
    let mut frame_loop = FrameLoop::new(pond.clone(), 60);
    let mut recorder = Recorder::new();

    // Advance the clock of the scene first
    frame_loop.tick(1000.0, &mut recorder);
    frame_loop
        .scene_mut()
        .handle_pointer(PointerEvent::Down(Vec2::new(610.0, 600.0)));
    frame_loop.scene_mut().handle_pointer(PointerEvent::Up);

    let jaw = |frame_loop: &FrameLoop<Habitat>| match &frame_loop.scene().entities()[0] {
        Entity::Crocodile(crocodile) => (crocodile.jaw(), crocodile.is_snapping()),
        _ => panic!("Expected a crocodile"),
    };

    frame_loop.tick(1000.0 + STEP_MS, &mut recorder);
    let (opening, snapping) = jaw(&frame_loop);
    assert!(opening > 0.0);
    assert!(snapping);

    // Mouth closes after 800ms
    for step in 2..100 {
        frame_loop.tick(1000.0 + f64::from(step) * STEP_MS, &mut recorder);
    }
    let (closed, snapping) = jaw(&frame_loop);
    assert!(!snapping);
    assert!(closed < 0.01);

    // Missing it does nothing
    pond.handle_pointer(PointerEvent::Down(Vec2::new(10.0, 10.0)));
    assert!(!pond.drag().is_dragging());
}

#[test]
fn flower_hit_is_asymmetric() {
    let flower = Flower::new(Vec2::new(400.0, 500.0))
        .with_size(10.0)
        .with_stem_height(100.0);
    let head = flower.head();
    let mut field = Habitat::new("field", bounds(), Background::Meadow).with_entity(flower);

    // The stem base is far away from the head
    field.handle_pointer(PointerEvent::Down(Vec2::new(400.0, 500.0)));
    assert!(!field.drag().is_dragging());

    // Slightly outside the petals still hits
    field.handle_pointer(PointerEvent::Down(head + Vec2::new(13.0, 0.0)));
    assert!(field.drag().is_dragging());

    // Flowers stay where they are dropped
    field.handle_pointer(PointerEvent::Move(Vec2::new(700.0, 300.0)));
    field.handle_pointer(PointerEvent::Up);
    assert_eq!(field.entities()[0].position(), Vec2::new(700.0, 300.0));
}

#[test]
fn touch_drags_like_mouse() {
    let mut viewport = Viewport::new(Size2::new(1200.0, 800.0), ViewportConfig::default());
    viewport.fit(Container {
        width: 640.0,
        window_width: 1280.0,
        window_height: 1000.0,
    });
    let top_left = Vec2::new(20.0, 100.0);

    let mut tank = Habitat::new("tank", bounds(), Background::Underwater)
        .with_entity(Fish::new(Vec2::new(600.0, 400.0)).with_size(20.0));

    let down = PointerEvent::from_touches(PointerPhase::Start, &[Vec2::new(320.0, 300.0)])
        .map(|event| event.to_logical(&viewport, top_left));
    tank.handle_pointer(down.unwrap());
    assert!(tank.drag().is_dragging());

    let moved = PointerEvent::from_touches(PointerPhase::Move, &[Vec2::new(120.0, 150.0)])
        .map(|event| event.to_logical(&viewport, top_left));
    tank.handle_pointer(moved.unwrap());
    assert_eq!(tank.entities()[0].position(), Vec2::new(200.0, 100.0));

    tank.handle_pointer(PointerEvent::from_touches(PointerPhase::End, &[]).unwrap());
    assert!(!tank.drag().is_dragging());
}

#[test]
fn refreshing_at_the_target_rate_renders_every_frame() {
    let config = Config::default();
    let interval_ms = 1000.0 / f64::from(config.target_fps);
    let mut frame_loop = FrameLoop::new(SceneKind::CrocodilePond.build(&config), config.target_fps);
    let mut recorder = Recorder::new();

    for frame in 1..=300_u32 {
        recorder.clear();

        assert_eq!(
            frame_loop.tick(f64::from(frame) * interval_ms, &mut recorder),
            FrameOutcome::Rendered,
            "frame {frame}"
        );
    }
    assert_eq!(frame_loop.frames(), 300);
}
