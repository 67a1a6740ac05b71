use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::configuration::config::EngineConfig;
use crate::interaction::gesture::GestureState;
use crate::simulation::color::{color_from_radius, Rgb};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{NVec2, Variant};

const INSTRUCTIONS: [&str; 2] = [
    "Left Click and Hold to Create a Planet",
    "Release to set size, then Left Click to set initial velocity",
];

pub fn run_2d(scenario: Scenario, engine: EngineConfig) {
    println!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.system.bodies.len());

    App::new()
        .insert_resource(scenario)
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Time::<Fixed>::from_hz(engine.tick_rate))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Planetary Simulation".into(),
                resolution: (engine.width, engine.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, setup_system)
        .add_systems(Update, (input_system, draw_system).chain())
        .add_systems(FixedUpdate, physics_step_system)
        .run();
}

fn setup_system(mut commands: Commands) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    commands.spawn(
        TextBundle::from_section(
            INSTRUCTIONS.join("\n"),
            TextStyle {
                font_size: 20.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
    );
}

// Cursor in window pixels, origin top-left, y down. This is the simulation's frame
fn cursor_position(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<NVec2> {
    let window = windows.get_single().ok()?;
    let pos = window.cursor_position()?;
    Some(NVec2::new(pos.x as f64, pos.y as f64))
}

fn input_system(
    mut scenario: ResMut<Scenario>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
) {
    let now_ms = time.elapsed().as_millis() as u64;
    let cursor = cursor_position(&windows);

    if mouse.just_pressed(MouseButton::Left) {
        if let Some(pos) = cursor {
            scenario.begin_gesture(pos, now_ms);
        }
    }

    // Release either fixes the size or, on the second click, the velocity
    if mouse.just_released(MouseButton::Left) {
        let state = *scenario.gesture.state();
        match state {
            GestureState::Sizing { .. } => {
                scenario.commit_size(now_ms);
            }
            GestureState::Aiming { .. } => {
                if let Some(pos) = cursor {
                    scenario.commit_velocity(pos);
                }
            }
            GestureState::Idle => {}
        }
    }

    if keys.just_pressed(KeyCode::Space) {
        scenario.clear_all();
    }

    if let Some(pos) = cursor {
        if keys.just_pressed(KeyCode::KeyP) {
            scenario.spawn_variant(Variant::NonColliding, pos);
        }
        if keys.just_pressed(KeyCode::KeyO) {
            scenario.spawn_variant(Variant::Ghost, pos);
        }
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    if let Err(err) = scenario.step() {
        error!("physics step failed: {err}");
    }
}

fn draw_system(
    scenario: Res<Scenario>,
    mut gizmos: Gizmos,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time<Real>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    // Simulation pixels -> Bevy world (origin at the window center, y up)
    let half = Vec2::new(window.width(), window.height()) / 2.0;
    let to_world = |p: NVec2| Vec2::new(p.x as f32 - half.x, half.y - p.y as f32);
    let to_color = |c: Rgb| Color::srgb_u8(c.r, c.g, c.b);

    for body in scenario.snapshot() {
        gizmos.circle_2d(to_world(body.position), body.radius as f32, to_color(body.color));
    }

    let now_ms = time.elapsed().as_millis() as u64;
    match *scenario.gesture.state() {
        GestureState::Sizing { start, .. } => {
            if let Some(radius) = scenario.gesture.preview_radius(now_ms, &scenario.parameters) {
                let color = color_from_radius(radius, scenario.parameters.color_saturation_radius);
                gizmos.circle_2d(to_world(start), radius as f32, to_color(color));
            }
        }
        GestureState::Aiming { start, .. } => {
            if let Some(cursor) = cursor_position(&windows) {
                gizmos.line_2d(to_world(start), to_world(cursor), Color::WHITE);
            }
        }
        GestureState::Idle => {}
    }
}
