use egui::{PointerButton, Rect, pos2, vec2};
use stratmap::event::{CanvasEvent, RecordingEventHandler};
use stratmap::history::HistoryAction;
use stratmap::{CanvasConfig, LayerId, ToolController, ToolKind, ZoomDirection};

fn viewport() -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0))
}

#[test]
fn test_controller_emits_events_in_order() {
    let recorder = RecordingEventHandler::new();
    let mut controller = ToolController::with_config(CanvasConfig::default());
    controller.subscribe(Box::new(recorder.clone()));

    controller.set_tool(ToolKind::Line);
    controller.pointer_down(pos2(10.0, 10.0), PointerButton::Primary, viewport());
    controller.pointer_up(pos2(60.0, 10.0), viewport());
    controller.select_layer(LayerId::new(1));

    assert_eq!(
        recorder.take(),
        vec![
            CanvasEvent::ToolChanged {
                old: ToolKind::Select,
                new: ToolKind::Line,
            },
            CanvasEvent::DrawingCommitted {
                layer: LayerId::new(0),
                action: HistoryAction::Line,
            },
            CanvasEvent::HistoryChanged {
                layer: LayerId::new(0),
                len: 2,
            },
            CanvasEvent::LayerSwitched {
                old: LayerId::new(0),
                new: LayerId::new(1),
            },
        ]
    );
}

#[test]
fn test_same_tool_and_empty_clear_are_silent() {
    let recorder = RecordingEventHandler::new();
    let mut controller = ToolController::with_config(CanvasConfig::default());
    controller.subscribe(Box::new(recorder.clone()));

    controller.set_tool(ToolKind::Select);
    controller.clear_layer();
    controller.undo();
    assert!(recorder.take().is_empty());

    controller.zoom(ZoomDirection::Out);
    match recorder.take().as_slice() {
        [CanvasEvent::ViewChanged { scale, offset }] => {
            assert!((scale - 0.9).abs() < 1e-6);
            assert_eq!(*offset, vec2(0.0, 0.0));
        }
        other => panic!("unexpected events {other:?}"),
    }
}
