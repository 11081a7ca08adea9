//! Stage domain: spawning elements and keeping transforms in sync.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::{ElementDef, StageConfig};
use crate::stage::{ElementColor, PageBox, StageBackdrop, StageBounds, StageElement};

/// Converts a config color triple into a Bevy color.
pub(crate) fn srgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::srgb(r, g, b)
}

pub(crate) fn spawn_stage(mut commands: Commands, config: Res<StageConfig>) {
    let bounds = StageBounds {
        width: config.container.width,
        height: config.container.height,
    };
    commands.insert_resource(bounds);

    commands.spawn((
        StageBackdrop,
        Name::new("stage"),
        Sprite::from_color(srgb(config.container.color), bounds.size()),
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));

    for element in &config.elements {
        spawn_element(&mut commands, element, bounds);
    }

    debug!("Spawned {} stage elements", config.elements.len());
}

fn spawn_element(commands: &mut Commands, element: &ElementDef, bounds: StageBounds) -> Entity {
    let page_box = PageBox::new(element.x, element.y, element.width, element.height);
    let color = srgb(element.color);
    let center = page_box.world_center(bounds.size());

    commands
        .spawn((
            StageElement,
            Name::new(element.name.clone()),
            page_box,
            ElementColor(color),
            Sprite::from_color(color, Vec2::new(element.width, element.height)),
            Transform::from_translation(center.extend(element.layer)),
        ))
        .id()
}

/// Moves sprites whose layout box changed. Depth is left alone.
pub(crate) fn sync_page_transforms(
    bounds: Res<StageBounds>,
    mut query: Query<(&PageBox, &mut Transform), Changed<PageBox>>,
) {
    for (page_box, mut transform) in &mut query {
        let center = page_box.world_center(bounds.size());
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}

/// Name -> entity lookup over stage elements. The first element with a
/// given name wins, mirroring a first-match selector.
pub fn index_elements<'a>(
    elements: impl IntoIterator<Item = (Entity, &'a Name)>,
) -> HashMap<&'a str, Entity> {
    let mut index = HashMap::new();
    for (entity, name) in elements {
        index.entry(name.as_str()).or_insert(entity);
    }
    index
}
