//! Presentation domain: tests for popped visuals.

use bevy::prelude::*;

use super::{POP_SCALE, PresentationPlugin, popped_tint};
use crate::hotspots::Popped;
use crate::stage::{ElementColor, PageBox};
use crate::testing::{element, small_stage, stage_app};

#[test]
fn test_popped_tint_lightens_and_keeps_alpha() {
    let base = Color::srgba(0.2, 0.4, 0.6, 0.5);
    let tinted = popped_tint(base).to_srgba();
    assert!(tinted.red > 0.2 && tinted.red <= 1.0);
    assert!(tinted.green > 0.4);
    assert!(tinted.blue > 0.6);
    assert_eq!(tinted.alpha, 0.5);
}

#[test]
fn test_popped_tint_keeps_white() {
    let tinted = popped_tint(Color::WHITE).to_srgba();
    assert_eq!((tinted.red, tinted.green, tinted.blue), (1.0, 1.0, 1.0));
}

#[test]
fn test_popped_target_grows_and_restores() {
    let mut app = stage_app(small_stage());
    app.add_plugins(PresentationPlugin);
    app.update();

    let target = element(&mut app, "a-obj");
    assert_eq!(
        app.world().get::<Transform>(target).unwrap().scale,
        Vec3::splat(POP_SCALE)
    );

    assert!(app.world().get::<Popped>(target).unwrap().0);

    let trigger = element(&mut app, "hs-a");
    app.world_mut()
        .get_mut::<PageBox>(trigger)
        .unwrap()
        .x = 200.0;
    app.update();

    let base = app.world().get::<ElementColor>(target).unwrap().0;
    assert_eq!(app.world().get::<Transform>(target).unwrap().scale, Vec3::ONE);
    assert_eq!(app.world().get::<Sprite>(target).unwrap().color, base);
}
