use zebra_crossing::geometry::Primitive;
use zebra_crossing::shell::{FramePacing, RecordingShell, WindowShell};
use zebra_crossing::{Game, LightPhase, Scene, SceneVariant, SimulationState};

/// Drawing is a pure read of the state.
#[test]
fn test_draw_is_idempotent() {
    let mut state = SimulationState::new();
    for _ in 0..321 {
        state.tick();
    }
    let scene = Scene::new(SceneVariant::Crossing);

    let first = scene.draw(&state);
    let second = scene.draw(&state);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(format!("{:?}", a), format!("{:?}", b));
        assert_eq!(a, b);
    }
}

#[test]
fn test_loop_runs_until_quit_and_presents_each_frame() {
    let mut shell = RecordingShell::quit_after(250);
    let game = Game::new(SceneVariant::Crossing, FramePacing::Uncapped);

    let statistics = game.run(&mut shell).expect("headless run");

    assert_eq!(shell.frames().len(), 250);
    assert_eq!(shell.polls(), 251);
    assert_eq!(statistics.ticks, 250);
    assert_eq!(statistics.phase_changes, 1);
    assert_eq!(statistics.ticks_in(LightPhase::Red), 200);
    assert_eq!(statistics.ticks_in(LightPhase::Green), 50);
}

#[test]
fn test_quit_before_first_frame_renders_nothing() {
    let mut shell = RecordingShell::new();
    shell.request_quit();
    let statistics = Game::new(SceneVariant::Plain, FramePacing::Uncapped)
        .run(&mut shell)
        .expect("headless run");
    assert!(shell.frames().is_empty());
    assert_eq!(statistics.ticks, 0);
}

#[test]
fn test_frames_reflect_light_phase() {
    let mut shell = RecordingShell::quit_after(202);
    Game::new(SceneVariant::Plain, FramePacing::Uncapped)
        .run(&mut shell)
        .expect("headless run");

    let lamp_colors = |frame: usize| -> Vec<_> {
        let primitives = &shell.frames()[frame].primitives;
        primitives[primitives.len() - 3..]
            .iter()
            .map(Primitive::color)
            .collect()
    };

    // Red lamp lit while red, green lamp lit once the light changes.
    let red_frame = lamp_colors(0);
    assert_eq!(red_frame[0].r, 1.0);
    assert_eq!(red_frame[2].g, 0.3);

    let green_frame = lamp_colors(201);
    assert_eq!(green_frame[0].r, 0.3);
    assert_eq!(green_frame[2].g, 1.0);
}

#[test]
fn test_background_follows_variant() {
    for variant in [SceneVariant::Plain, SceneVariant::Crossing] {
        let mut shell = RecordingShell::quit_after(1);
        Game::new(variant, FramePacing::Uncapped)
            .run(&mut shell)
            .expect("headless run");
        assert_eq!(shell.frames()[0].background, variant.background());
    }
}

#[test]
fn test_step_drives_a_single_frame() {
    let mut shell = RecordingShell::new();
    let mut game = Game::new(SceneVariant::Crossing, FramePacing::Uncapped);
    game.step(&mut shell).unwrap();
    game.step(&mut shell).unwrap();

    assert_eq!(game.state().tick_count(), 2);
    assert_eq!(shell.frames().len(), 2);
    assert!(!shell.should_quit());
}
