use crate::inspector::{EntityInfo, ListSummary};
use glam::Vec2;
use sandbox_common::Extent;
use sandbox_kernel::EntityList;
use std::ops::RangeInclusive;

/// Upper bound of the scale sliders, in pixels.
pub const MAX_SCALE: f32 = 1024.0;

const WINDOW_TITLE: &str = "Test window";
const GREETING: &str = "bababooey";

/// What the panel did this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelResponse {
    /// A slider moved entity 0.
    pub changed: bool,
}

/// The debug window: a greeting, the list summary, and sliders bound to
/// the first entity's position and scale.
#[derive(Debug, Clone)]
pub struct DebugPanel {
    extent: Extent,
}

impl DebugPanel {
    /// `extent` bounds the position sliders.
    pub fn new(extent: Extent) -> Self {
        Self { extent }
    }

    pub fn show(&self, ctx: &egui::Context, entities: &mut EntityList) -> PanelResponse {
        let mut response = PanelResponse::default();
        let summary = ListSummary::of(entities);

        egui::Window::new(WINDOW_TITLE).show(ctx, |ui| {
            ui.label(GREETING);
            ui.label(summary.to_string());

            let Some(entity) = entities.first_mut() else {
                return;
            };
            ui.separator();
            ui.label(
                EntityInfo {
                    index: 0,
                    entity: *entity,
                }
                .to_string(),
            );

            let size = self.extent.size();
            response.changed |= vec2_sliders(
                ui,
                "position",
                &mut entity.position,
                [0.0..=size.x, 0.0..=size.y],
            );
            response.changed |= vec2_sliders(
                ui,
                "scale",
                &mut entity.scale,
                [0.0..=MAX_SCALE, 0.0..=MAX_SCALE],
            );
        });

        if response.changed {
            tracing::trace!("entity 0 edited");
        }
        response
    }
}

fn vec2_sliders(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut Vec2,
    [x_range, y_range]: [RangeInclusive<f32>; 2],
) -> bool {
    ui.horizontal(|ui| {
        let x = ui.add(egui::Slider::new(&mut value.x, x_range).text("x"));
        let y = ui.add(egui::Slider::new(&mut value.y, y_range).text("y"));
        ui.label(label);
        x.changed() || y.changed()
    })
    .inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect};
    use sandbox_common::EntityKind;
    use sandbox_kernel::Entity;

    /// Drives the panel through egui frames on one context.
    struct Frames {
        ctx: egui::Context,
        panel: DebugPanel,
        time: f64,
    }

    impl Frames {
        fn new(panel: DebugPanel) -> Self {
            Self {
                ctx: egui::Context::default(),
                panel,
                time: 0.0,
            }
        }

        /// One frame. A second of input time passes per frame so separate
        /// clicks never merge into a double click.
        fn run(&mut self, list: &mut EntityList, events: Vec<Event>) -> PanelResponse {
            self.time += 1.0;
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1024.0, 768.0))),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let panel = &self.panel;
            let mut response = PanelResponse::default();
            let _ = self.ctx.run(input, |ctx| {
                response = panel.show(ctx, list);
            });
            response
        }
    }

    fn run_frame(panel: DebugPanel, list: &mut EntityList) -> PanelResponse {
        Frames::new(panel).run(list, Vec::new())
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn press(pos: Pos2) -> Vec<Event> {
        vec![Event::PointerMoved(pos), button(pos, true)]
    }

    fn player_and_slime(extent: Extent) -> (EntityList, Entity) {
        let mut list = EntityList::with_player(extent);
        let second = Entity::new(EntityKind::Slime, Vec2::splat(64.0), Vec2::new(10.0, 10.0));
        list.push(second);
        (list, second)
    }

    /// Clicks a grid of points, bottom row first, on a fresh list each time
    /// and returns the first point that moves entity 0 without touching its
    /// scale. The scale row sits below the position row and the title bar
    /// sits above it, so the search never reaches the collapse button.
    fn find_position_slider(frames: &mut Frames, extent: Extent) -> Option<Pos2> {
        for row in (0..60).rev() {
            for column in 0..40 {
                let pos = Pos2::new(column as f32 * 8.0, row as f32 * 6.0);
                let (mut list, _) = player_and_slime(extent);
                let before = *list.get(0)?;
                frames.run(&mut list, press(pos));
                frames.run(&mut list, vec![button(pos, false)]);
                let after = *list.get(0)?;
                if after.position != before.position && after.scale == before.scale {
                    return Some(pos);
                }
            }
        }
        None
    }

    #[test]
    fn idle_frame_leaves_entities_untouched() {
        let extent = Extent::new(800, 600);
        let mut list = EntityList::with_player(extent);
        let before = *list.get(0).unwrap();

        let response = run_frame(DebugPanel::new(extent), &mut list);
        assert!(!response.changed);
        assert_eq!(*list.get(0).unwrap(), before);
    }

    #[test]
    fn empty_list_shows_greeting_only() {
        let mut list = EntityList::new();
        let response = run_frame(DebugPanel::new(Extent::new(800, 600)), &mut list);
        assert!(!response.changed);
        assert!(list.is_empty());
    }

    #[test]
    fn only_first_entity_is_bound() {
        let extent = Extent::new(800, 600);
        let (mut list, second) = player_and_slime(extent);

        run_frame(DebugPanel::new(extent), &mut list);
        assert_eq!(*list.get(1).unwrap(), second);
    }

    #[test]
    fn dragging_position_slider_moves_only_entity_zero() {
        let extent = Extent::new(800, 600);
        let mut frames = Frames::new(DebugPanel::new(extent));
        let (mut list, second) = player_and_slime(extent);
        // Lay the window out so presses can hit its widgets.
        frames.run(&mut list, Vec::new());
        frames.run(&mut list, Vec::new());

        let Some(start) = find_position_slider(&mut frames, extent) else {
            panic!("no point on the panel moves entity 0");
        };
        let before = *list.get(0).unwrap();
        let frames_of_drag = [
            press(start),
            vec![Event::PointerMoved(start + egui::vec2(20.0, 0.0))],
            vec![Event::PointerMoved(start + egui::vec2(40.0, 0.0))],
            vec![button(start + egui::vec2(40.0, 0.0), false)],
        ];
        let mut changed = false;
        for events in frames_of_drag {
            changed |= frames.run(&mut list, events).changed;
        }

        let after = *list.get(0).unwrap();
        assert!(changed);
        assert_ne!(after.position, before.position);
        assert_eq!(after.scale, before.scale);
        assert_eq!(*list.get(1).unwrap(), second);
    }
}
