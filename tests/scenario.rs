use sketchboard::config::{CanvasConfig, Config};
use sketchboard::draw::Shape;
use sketchboard::host::{
    CanvasEvent, CanvasHost, DragPayload, DropEffect, EventOutcome, Listener, Viewport,
    grid_line_count, parse_script,
};
use sketchboard::icons::{CARD_HEIGHT, CARD_WIDTH, find_entry};
use sketchboard::input::Tool;
use sketchboard::notice::NoticeLevel;

/// Viewport that yields an 800x600 canvas with the stock sizing rules.
fn viewport_800x600() -> Viewport {
    Viewport::new(1000, 850)
}

fn mount() -> CanvasHost {
    CanvasHost::mount(viewport_800x600(), Config::default())
}

fn drawings(host: &CanvasHost) -> Vec<&Shape> {
    host.scene().drawings().map(|object| &object.shape).collect()
}

#[test]
fn rectangle_session_then_clear() {
    let mut host = mount();
    assert_eq!((host.scene().width(), host.scene().height()), (800, 600));
    assert_eq!(host.scene().grid_line_count(), 56);

    let script = parse_script(
        r#"[
            {"event": "set-tool", "tool": "rectangle"},
            {"event": "pointer-down", "x": 100, "y": 100},
            {"event": "pointer-move", "x": 250, "y": 180},
            {"event": "pointer-up", "x": 250, "y": 180},
            {"event": "set-tool", "tool": "select"}
        ]"#,
    )
    .unwrap();
    for event in script {
        host.dispatch(event).unwrap();
    }

    let objects: Vec<_> = host.scene().drawings().collect();
    assert_eq!(objects.len(), 1);
    assert!(objects[0].selectable && objects[0].evented);
    let Shape::Rect {
        left,
        top,
        width,
        height,
        ..
    } = objects[0].shape
    else {
        panic!("expected a rectangle");
    };
    assert_eq!((left, top, width, height), (100.0, 100.0, 150.0, 80.0));

    host.dispatch(CanvasEvent::Clear).unwrap();
    assert_eq!(host.scene().len(), 56);
    assert_eq!(host.scene().grid_line_count(), 56);
    let notices = host.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].message, "Canvas cleared!");
}

#[test]
fn clear_twice_leaves_only_grid() {
    let mut host = CanvasHost::mount(Viewport::new(1920, 1080), Config::default());
    let expected = grid_line_count(1400, 800, &CanvasConfig::default());

    host.set_tool(Tool::Line);
    let input = host.input_mut();
    input.on_pointer_down(10.0, 10.0);
    input.on_pointer_move(90.0, 40.0);
    input.on_pointer_up(90.0, 40.0);

    host.clear();
    host.clear();
    assert_eq!(host.scene().len(), expected);
    assert!(host.scene().objects().iter().all(|object| object.is_grid()));
}

#[test]
fn clear_mid_gesture_aborts_it() {
    let mut host = mount();
    host.set_tool(Tool::Circle);
    host.input_mut().on_pointer_down(50.0, 50.0);
    host.clear();

    assert_eq!(host.input().provisional(), None);
    host.input_mut().on_pointer_move(80.0, 80.0);
    host.input_mut().on_pointer_up(80.0, 80.0);
    assert_eq!(host.scene().len(), 56);
}

#[test]
fn invalid_drops_leave_scene_unchanged() {
    let mut host = mount();
    let before = host.scene().len();

    for payload in [
        DragPayload::default(),
        DragPayload::new("redis", ""),
        DragPayload::new("", "Redis"),
    ] {
        assert_eq!(host.drop_icon(100.0, 100.0, &payload), None);
    }
    assert_eq!(host.scene().len(), before);
    assert!(host.take_notices().is_empty());
}

#[test]
fn valid_drop_adds_exactly_one_centred_card() {
    let mut host = mount();
    let before = host.scene().len();
    let payload = find_entry("redis").unwrap().to_payload();

    let outcome = host
        .dispatch(CanvasEvent::Drop {
            x: 400.0,
            y: 300.0,
            payload,
        })
        .unwrap();
    assert!(matches!(outcome, EventOutcome::Dropped(_)));
    assert_eq!(host.scene().len(), before + 1);

    let Shape::Group { left, top, .. } = drawings(&host)[0] else {
        panic!("expected a group");
    };
    assert_eq!((*left, *top), (400.0 - CARD_WIDTH / 2.0, 300.0 - CARD_HEIGHT / 2.0));
    assert_eq!(host.take_notices()[0].message, "Added Redis to canvas");
}

#[test]
fn dragover_answers_copy() {
    let mut host = mount();
    assert_eq!(
        host.dispatch(CanvasEvent::DragOver).unwrap(),
        EventOutcome::DropEffect(DropEffect::Copy)
    );
}

#[test]
fn resize_keeps_objects_and_rebuilds_grid() {
    let mut host = mount();
    host.drop_icon(100.0, 100.0, &DragPayload::new("kafka", "Kafka"));

    host.dispatch(CanvasEvent::Resize {
        width: 1920,
        height: 1080,
    })
    .unwrap();
    assert_eq!((host.scene().width(), host.scene().height()), (1400, 800));
    assert_eq!(host.scene().grid_line_count(), 56 + 32);
    assert_eq!(host.scene().drawings().count(), 1);
    // Grid stays underneath
    assert!(host.scene().objects()[0].is_grid());
    assert!(!host.scene().objects().last().unwrap().is_grid());
}

#[test]
fn resize_can_keep_stale_grid() {
    let mut config = Config::default();
    config.canvas.regenerate_grid_on_resize = false;
    let mut host = CanvasHost::mount(viewport_800x600(), config);

    host.resize(Viewport::new(1920, 1080));
    assert_eq!(host.scene().width(), 1400);
    assert_eq!(host.scene().grid_line_count(), 56);
}

#[test]
fn events_after_dispose_are_ignored() {
    let mut host = mount();
    host.dispatch(CanvasEvent::Dispose).unwrap();
    assert!(!host.is_mounted());
    assert!(!host.has_listener(Listener::Drop));

    let before = host.scene().len();
    let outcome = host
        .dispatch(CanvasEvent::Drop {
            x: 10.0,
            y: 10.0,
            payload: DragPayload::new("redis", "Redis"),
        })
        .unwrap();
    assert_eq!(outcome, EventOutcome::Ignored);
    assert_eq!(
        host.dispatch(CanvasEvent::Clear).unwrap(),
        EventOutcome::Ignored
    );
    assert_eq!(host.scene().len(), before);
}

#[test]
fn text_session_through_events() {
    let mut host = mount();
    let script = parse_script(
        r#"[
            {"event": "set-tool", "tool": "text"},
            {"event": "pointer-down", "x": 40, "y": 40},
            {"event": "key", "key": {"char": "D"}},
            {"event": "key", "key": {"char": "B"}},
            {"event": "key", "key": "escape"},
            {"event": "key", "key": {"char": "v"}}
        ]"#,
    )
    .unwrap();
    for event in script {
        host.dispatch(event).unwrap();
    }

    assert_eq!(host.input().active_tool(), Tool::Select);
    let Shape::Text { text, .. } = drawings(&host)[0] else {
        panic!("expected text");
    };
    assert_eq!(text, "DB");
}

#[test]
fn set_color_accepts_hex_and_palette_names() {
    let mut host = mount();
    host.dispatch(CanvasEvent::SetColor {
        color: "Purple".to_string(),
    })
    .unwrap();
    assert_eq!(host.input().active_color().to_hex(), "#a855f7");

    let err = host
        .dispatch(CanvasEvent::SetColor {
            color: "not a color".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("not a color"));
    assert_eq!(host.input().active_color().to_hex(), "#a855f7");
}

#[test]
fn export_writes_png_and_posts_notice() {
    let temp = tempfile::TempDir::new().unwrap();
    let mut config = Config::default();
    config.export.directory = Some(temp.path().to_path_buf());
    let mut host = CanvasHost::mount(viewport_800x600(), config);

    let outcome = host.dispatch(CanvasEvent::Export { path: None }).unwrap();
    let EventOutcome::Exported(path) = outcome else {
        panic!("expected an export");
    };
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("system-design-") && name.ends_with(".png"));
    assert_eq!(path.parent(), Some(temp.path()));

    let png = std::fs::read(&path).unwrap();
    let decoded = cairo::ImageSurface::create_from_png(&mut png.as_slice()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1600, 1200));
    assert_eq!(host.take_notices()[0].message, "Canvas exported as PNG!");
}

#[test]
fn palette_click_posts_drag_hint() {
    let mut host = mount();
    let before = host.scene().len();

    let outcome = host
        .dispatch(CanvasEvent::PaletteClick {
            id: "Kafka".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, EventOutcome::Handled);
    assert_eq!(host.scene().len(), before);

    let notices = host.take_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
    assert_eq!(notices[0].message, "Drag Kafka to canvas");

    assert_eq!(host.palette_click("teleporter"), None);
    assert!(host.take_notices().is_empty());
}
