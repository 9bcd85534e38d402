mod common;

use common::{Call, RecordingRenderer};
use image_tag::{PointId, PointSeed, Position, Surface, TagConfig, TagController};

fn surface() -> Surface {
    Surface::new(200.0, 100.0).unwrap()
}

fn controller() -> TagController<RecordingRenderer> {
    TagController::new(RecordingRenderer::default(), TagConfig::default(), surface())
}

fn active_count(controller: &TagController<RecordingRenderer>) -> usize {
    controller.points().filter(|point| point.is_active).count()
}

#[test]
fn test_new_point_is_centered_and_active() {
    let mut controller = controller();

    let id = controller.new_point();

    let point = controller.get_active_point().unwrap();
    assert_eq!(point.id, id);
    assert_eq!(point.x, 50.0);
    assert_eq!(point.y, 50.0);
    assert!(point.is_active);
    assert_eq!(controller.renderer().attached, vec![0]);
    assert_eq!(controller.renderer().active_styled_count(), 1);
    assert_eq!(
        controller.renderer().last_position(0),
        Some((50.0, 50.0, "%".to_string(), 10.0))
    );
}

#[test]
fn test_click_moves_active_point() {
    let mut controller = controller();
    let id = controller.new_point();

    assert!(controller.on_surface_click(20.0, 10.0, surface()));

    let point = controller.get_point_by_id(&id).unwrap();
    assert_eq!(point.x, 10.0);
    assert_eq!(point.y, 10.0);
}

#[test]
fn test_click_ignored_when_creation_disabled() {
    let mut controller = controller();
    let id = controller.new_point();

    controller.disable_new_points();
    assert!(!controller.on_surface_click(20.0, 10.0, surface()));

    let point = controller.get_point_by_id(&id).unwrap();
    assert_eq!((point.x, point.y), (50.0, 50.0));
    assert!(point.is_active);

    controller.enable_new_points();
    assert!(controller.click(20.0, 10.0));
    assert_eq!(controller.get_point_by_id(&id).unwrap().x, 10.0);
}

#[test]
fn test_click_without_active_point_creates_nothing() {
    let mut controller = controller();

    assert!(!controller.click(20.0, 10.0));
    assert_eq!(controller.points().count(), 0);
    assert!(controller.renderer().calls.iter().all(|call| matches!(call, Call::Clip(_))));
}

#[test]
fn test_seed_points_replaces_registry() {
    let mut controller = controller();
    controller.new_point();
    controller.new_point();

    controller.seed_points(vec![PointSeed::new(1u64, 5.0, 5.0), PointSeed::new(2u64, 90.0, 90.0)]);

    let points: Vec<_> = controller.points().collect();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].id, PointId::Number(1));
    assert_eq!(points[1].id, PointId::Number(2));
    assert!(points.iter().all(|point| !point.is_active));
    assert!(controller.get_active_point().is_none());

    let renderer = controller.renderer();
    assert_eq!(renderer.detach_count(), 2);
    assert_eq!(renderer.attached, vec![2, 3]);
    assert_eq!(renderer.last_position(3), Some((90.0, 90.0, "%".to_string(), 10.0)));
}

#[test]
fn test_removing_active_point_leaves_none_active() {
    let mut controller = controller();
    let first = controller.new_point();
    let second = controller.new_point();

    assert!(controller.remove_point(&second));

    assert!(controller.get_active_point().is_none());
    assert!(!controller.get_point_by_id(&first).unwrap().is_active);
    assert!(controller.get_point_by_id(&second).is_none());
    assert_eq!(controller.renderer().attached, vec![0]);
}

#[test]
fn test_removing_twice_is_harmless() {
    let mut controller = controller();
    let first = controller.new_point();
    let second = controller.new_point();

    assert!(controller.remove_point(&first));
    assert!(!controller.remove_point(&first));

    assert_eq!(controller.points().count(), 1);
    assert!(controller.get_point_by_id(&second).unwrap().is_active);
    assert_eq!(controller.renderer().detach_count(), 1);
}

#[test]
fn test_save_all_clears_selection_and_styling() {
    let mut controller = controller();
    controller.new_point();
    let second = controller.new_point();
    controller.set_active_point(&second);

    controller.save_all_points();

    assert!(controller.get_active_point().is_none());
    assert_eq!(controller.renderer().active_styled_count(), 0);
}

#[test]
fn test_set_active_point_switches_selection() {
    let mut controller = controller();
    let first = controller.new_point();
    let second = controller.new_point();
    assert_eq!(controller.get_active_point().unwrap().id, second);

    assert!(controller.set_active_point(&first));

    assert_eq!(controller.get_active_point().unwrap().id, first);
    assert_eq!(active_count(&controller), 1);
    assert_eq!(controller.renderer().styled_active, vec![true, false]);
}

#[test]
fn test_set_active_unknown_id_keeps_selection() {
    let mut controller = controller();
    let id = controller.new_point();

    assert!(!controller.set_active_point(&PointId::from("missing")));
    assert_eq!(controller.get_active_point().unwrap().id, id);
}

#[test]
fn test_position_point_distinguishes_zero_from_unset() {
    let mut controller = controller();
    let id = controller.new_point();

    assert!(controller.position_point(&id, Position { x: Some(0.0), y: None }));

    let point = controller.get_point_by_id(&id).unwrap();
    assert_eq!(point.x, 0.0);
    assert_eq!(point.y, 50.0);
    assert_eq!(
        controller.renderer().last_position(0),
        Some((0.0, 50.0, "%".to_string(), 10.0))
    );
}

#[test]
fn test_pixel_mode_stores_raw_offsets() {
    let config = TagConfig {
        is_percentage: false,
        radius: 6.0,
        ..TagConfig::default()
    };
    let mut controller = TagController::new(RecordingRenderer::default(), config, surface());

    let id = controller.new_point();
    assert_eq!(
        controller.renderer().last_position(0),
        Some((100.0, 50.0, "px".to_string(), 6.0))
    );

    controller.click(20.0, 10.0);
    let point = controller.get_point_by_id(&id).unwrap();
    assert_eq!((point.x, point.y), (20.0, 10.0));
}

#[test]
fn test_click_follows_resized_surface() {
    let mut controller = controller();
    let id = controller.new_point();

    controller.set_surface(Surface::new(400.0, 200.0).unwrap());
    assert_eq!(controller.surface().width(), 400.0);

    controller.renderer_mut().calls.clear();
    assert!(controller.click(100.0, 50.0));

    let point = controller.get_point_by_id(&id).unwrap();
    assert_eq!((point.x, point.y), (25.0, 25.0));
    assert_eq!(controller.renderer().calls.len(), 1);
}

#[test]
fn test_click_uses_supplied_surface() {
    let mut controller = controller();
    let id = controller.new_point();

    let resized = Surface::new(400.0, 200.0).unwrap();
    controller.on_surface_click(100.0, 50.0, resized);

    let point = controller.get_point_by_id(&id).unwrap();
    assert_eq!((point.x, point.y), (25.0, 25.0));
}

#[test]
fn test_construction_applies_config() {
    let config = TagConfig {
        is_disabled: true,
        seed_data: Some(vec![PointSeed::new("lamp", 30.0, 40.0).with_text("Lamp")]),
        ..TagConfig::default()
    };
    let mut controller = TagController::new(RecordingRenderer::default(), config, surface());

    assert_eq!(controller.renderer().calls[0], Call::Clip(true));
    assert!(!controller.is_creation_enabled());

    let lamp = PointId::from("lamp");
    assert_eq!(controller.get_point_by_id(&lamp).unwrap().text, "Lamp");
    assert!(controller.get_active_point().is_none());

    controller.set_active_point(&lamp);
    assert!(!controller.click(20.0, 10.0));
    assert_eq!(controller.get_point_by_id(&lamp).unwrap().x, 30.0);
}

#[test]
fn test_overflow_allowed_skips_clipping() {
    let config = TagConfig {
        allow_overflow: true,
        ..TagConfig::default()
    };
    let controller = TagController::new(RecordingRenderer::default(), config, surface());

    assert!(!controller
        .renderer()
        .calls
        .iter()
        .any(|call| matches!(call, Call::Clip(_))));
}

#[test]
fn test_generated_ids_skip_seeded_ids() {
    let mut controller = controller();
    controller.seed_points(vec![PointSeed::new(1u64, 5.0, 5.0), PointSeed::new(2u64, 6.0, 6.0)]);

    let first = controller.new_point();
    let second = controller.new_point();

    assert_eq!(first, PointId::Number(3));
    assert_eq!(second, PointId::Number(4));
}

#[test]
fn test_duplicate_ids_use_first_match() {
    let mut controller = controller();
    controller.seed_points(vec![PointSeed::new(1u64, 5.0, 5.0), PointSeed::new(1u64, 60.0, 60.0)]);
    let id = PointId::Number(1);

    assert_eq!(controller.get_point_by_id(&id).unwrap().x, 5.0);

    controller.set_active_point(&id);
    assert_eq!(active_count(&controller), 1);

    assert!(controller.remove_point(&id));
    assert_eq!(controller.points().count(), 0);
    assert_eq!(controller.renderer().detach_count(), 2);
}

#[test]
fn test_label_point_updates_text() {
    let mut controller = controller();
    let id = controller.new_point();

    assert!(controller.label_point(&id, "Chair"));

    assert_eq!(controller.get_point_by_id(&id).unwrap().text, "Chair");
    assert_eq!(
        controller.renderer().calls.last(),
        Some(&Call::Label {
            handle: 0,
            text: "Chair".to_string()
        })
    );
}

#[test]
fn test_single_active_invariant_over_operation_mix() {
    let mut controller = controller();
    let mut state: u64 = 0x2545_f491;

    for _ in 0..500 {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let roll = (state >> 33) % 8;
        let ids: Vec<PointId> = controller.points().map(|point| point.id.clone()).collect();
        let pick = ids.get((state >> 40) as usize % ids.len().max(1)).cloned();

        match roll {
            0 | 1 => {
                controller.new_point();
            }
            2 => {
                if let Some(id) = pick {
                    controller.set_active_point(&id);
                }
            }
            3 => {
                if let Some(id) = pick {
                    controller.remove_point(&id);
                }
            }
            4 => controller.save_all_points(),
            5 => {
                controller.click(((state >> 20) % 200) as f64, ((state >> 24) % 100) as f64);
            }
            6 => controller.seed_points(vec![
                PointSeed::new(1u64, 5.0, 5.0),
                PointSeed::new(2u64, 6.0, 6.0),
            ]),
            _ => {
                if let Some(id) = pick {
                    controller.position_point(&id, Position::new(1.0, 2.0));
                }
            }
        }

        assert!(active_count(&controller) <= 1);
        assert_eq!(
            controller.renderer().attached.len(),
            controller.points().count()
        );
    }
}
