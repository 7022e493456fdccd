//! Gallery walk integration test
//!
//! Проверяем полный кадр (input → movement → proximity → selection → camera → footprints):
//! - Подход к картине публикует nearest ровно один раз
//! - Enter / стрелки / Escape переключают camera mode
//! - Пауза и потеря фокуса останавливают аватара
//! - Инварианты: границы комнаты, лимит следов

use bevy::prelude::*;
use gallery_simulation::gallery::default_paintings;
use gallery_simulation::*;

/// Счётчик NearestPaintingChanged (читается после Interaction)
#[derive(Resource, Default)]
struct NearestChanges(Vec<Option<String>>);

fn count_nearest_changes(
    mut events: EventReader<NearestPaintingChanged>,
    mut changes: ResMut<NearestChanges>,
) {
    for event in events.read() {
        changes.0.push(event.current.clone());
    }
}

/// Helper: галерея с семью картинами и аватаром в `start`
fn create_gallery_app(start: Vec3) -> App {
    let mut app = create_headless_app(42);
    register_paintings(app.world_mut(), default_paintings());
    app.insert_resource(AvatarState::at(start))
        .init_resource::<NearestChanges>()
        .add_systems(
            Update,
            count_nearest_changes
                .after(GallerySet::Interaction)
                .before(GallerySet::Camera),
        );
    app
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn set_key(app: &mut App, key: LogicalKey, pressed: bool) {
    let mut input = app.world_mut().resource_mut::<InputState>();
    if pressed {
        input.press(key);
    } else {
        input.release(key);
    }
}

#[test]
fn test_walk_up_to_painting_publishes_nearest_once() {
    let mut app = create_gallery_app(Vec3::new(0.0, 0.0, -8.0));
    run_frames(&mut app, 1);
    assert!(app.world().resource::<NearestPainting>().0.is_none());

    set_key(&mut app, LogicalKey::Forward, true);
    set_key(&mut app, LogicalKey::Run, true);
    run_frames(&mut app, 300);
    set_key(&mut app, LogicalKey::Forward, false);
    set_key(&mut app, LogicalKey::Run, false);

    // Постоять у картины: nearest не дёргается
    run_frames(&mut app, 120);

    let nearest = app.world().resource::<NearestPainting>();
    assert_eq!(nearest.id(), Some("painting-2"));

    let changes = &app.world().resource::<NearestChanges>().0;
    assert_eq!(changes, &vec![Some("painting-2".to_string())]);

    let snapshot = world_snapshot(&app);
    assert_eq!(snapshot.nearest.map(|p| p.title), Some("Urban Echoes".to_string()));
    assert!(!snapshot.is_moving);
}

#[test]
fn test_select_cycle_dismiss_drives_camera_mode() {
    let mut app = create_gallery_app(Vec3::new(0.2, 0.0, -13.0));
    run_frames(&mut app, 2);
    assert_eq!(app.world().resource::<NearestPainting>().id(), Some("painting-2"));

    app.world_mut().send_event(InteractRequested);
    run_frames(&mut app, 1);
    {
        let camera = app.world().resource::<GalleryCamera>();
        assert_eq!(camera.mode, CameraMode::Zoom);
        assert_eq!(camera.zoom_target.as_deref(), Some("painting-2"));
        assert_eq!(camera.fov, CameraConfig::default().establishing_fov);
    }

    run_frames(&mut app, 30);
    assert!(app.world().resource::<GalleryCamera>().fov < CameraConfig::default().establishing_fov);

    // Next до конца подлёта: FOV снова establishing
    app.world_mut().send_event(CycleSelection { forward: true });
    run_frames(&mut app, 1);
    {
        let camera = app.world().resource::<GalleryCamera>();
        assert_eq!(camera.zoom_target.as_deref(), Some("painting-3"));
        assert_eq!(camera.fov, CameraConfig::default().establishing_fov);
    }
    assert_eq!(app.world().resource::<SelectedPainting>().id(), Some("painting-3"));

    app.world_mut().send_event(DismissSelection);
    run_frames(&mut app, 1);
    assert!(app.world().resource::<SelectedPainting>().0.is_none());
    assert_eq!(app.world().resource::<GalleryCamera>().mode, CameraMode::Orbit);
}

#[test]
fn test_drag_ignored_without_pointer_down() {
    let mut app = create_gallery_app(Vec3::ZERO);
    run_frames(&mut app, 1);

    app.world_mut().send_event(PointerDragged {
        delta: Vec2::new(-200.0, 0.0),
    });
    run_frames(&mut app, 1);
    assert_eq!(app.world().resource::<GalleryCamera>().target_yaw, 0.0);

    app.world_mut().resource_mut::<InputState>().pointer_down = true;
    app.world_mut().send_event(PointerDragged {
        delta: Vec2::new(-200.0, 0.0),
    });
    run_frames(&mut app, 1);
    assert!(app.world().resource::<GalleryCamera>().target_yaw > 0.0);
}

#[test]
fn test_focus_lost_stops_avatar() {
    let mut app = create_gallery_app(Vec3::ZERO);
    set_key(&mut app, LogicalKey::Right, true);
    run_frames(&mut app, 30);
    assert!(app.world().resource::<AvatarState>().is_moving);

    app.world_mut().send_event(InputFocusLost);
    run_frames(&mut app, 1);

    assert_eq!(*app.world().resource::<InputState>(), InputState::default());
    assert!(!app.world().resource::<AvatarState>().is_moving);
}

#[test]
fn test_pause_freezes_avatar() {
    let mut app = create_gallery_app(Vec3::ZERO);
    set_key(&mut app, LogicalKey::Forward, true);
    run_frames(&mut app, 10);

    app.world_mut().send_event(TogglePause);
    run_frames(&mut app, 1);
    let frozen = *app.world().resource::<AvatarState>();

    run_frames(&mut app, 30);
    assert_eq!(*app.world().resource::<AvatarState>(), frozen);
    assert!(world_snapshot(&app).paused);

    app.world_mut().send_event(TogglePause);
    run_frames(&mut app, 5);
    assert_ne!(*app.world().resource::<AvatarState>(), frozen);
}

#[test]
fn test_long_run_keeps_invariants() {
    let mut app = create_gallery_app(Vec3::ZERO);
    let bound = MovementConfig::default().bound();
    let cap = FootprintConfig::default().max_footprints;

    set_key(&mut app, LogicalKey::Backward, true);
    set_key(&mut app, LogicalKey::Left, true);
    set_key(&mut app, LogicalKey::Run, true);

    for _ in 0..2400 {
        app.update();

        let avatar = app.world().resource::<AvatarState>();
        assert!(avatar.position.x.abs() <= bound);
        assert!(avatar.position.z.abs() <= bound);
        assert!(!avatar.is_running || avatar.is_moving);
        assert!(app.world().resource::<Footprints>().len() <= cap);
    }

    let avatar = app.world().resource::<AvatarState>();
    assert_eq!(avatar.position.x, -bound);
    assert_eq!(avatar.position.z, bound);
}

#[test]
fn test_animation_follows_motion() {
    let mut app = create_gallery_app(Vec3::ZERO);
    app.insert_resource(AnimationClips {
        idle: Some("Idle".to_string()),
        walk: Some("Walk".to_string()),
        run: None,
    });
    run_frames(&mut app, 1);
    assert_eq!(app.world().resource::<ActiveAnimation>().clip.as_deref(), Some("Idle"));

    set_key(&mut app, LogicalKey::Forward, true);
    run_frames(&mut app, 1);
    {
        let active = app.world().resource::<ActiveAnimation>();
        assert_eq!(active.state, AnimationState::Walk);
        assert_eq!(active.clip.as_deref(), Some("Walk"));
    }

    set_key(&mut app, LogicalKey::Run, true);
    run_frames(&mut app, 1);
    let active = app.world().resource::<ActiveAnimation>();
    assert_eq!(active.state, AnimationState::Run);
    assert_eq!(active.clip.as_deref(), Some("Walk"));
    assert!(active.time_scale > 1.0);
}
