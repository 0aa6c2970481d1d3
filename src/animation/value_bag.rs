//! Value bag marshaling: turns geometry snapshots into the keyed object handed to the
//! layout animation manager.

use crate::animation::{AnimationPayload, GeometryValues};
use crate::runtime::Object;

/// Key names for the four geometry fields of one snapshot.
struct GeometryKeys {
    x: &'static str,
    y: &'static str,
    width: &'static str,
    height: &'static str,
}

const SINGLE_KEYS: GeometryKeys = GeometryKeys {
    x: "originX",
    y: "originY",
    width: "width",
    height: "height",
};

const CURRENT_KEYS: GeometryKeys = GeometryKeys {
    x: "currentOriginX",
    y: "currentOriginY",
    width: "currentWidth",
    height: "currentHeight",
};

const TARGET_KEYS: GeometryKeys = GeometryKeys {
    x: "targetOriginX",
    y: "targetOriginY",
    width: "targetWidth",
    height: "targetHeight",
};

fn write_geometry(bag: &mut Object, keys: &GeometryKeys, values: &GeometryValues) {
    bag.set_property(keys.x, values.x);
    bag.set_property(keys.y, values.y);
    bag.set_property(keys.width, values.width);
    bag.set_property(keys.height, values.height);
}

/// Build a fresh value bag for the given payload. Values are forwarded as is, NaN included.
pub fn build_value_bag(payload: &AnimationPayload) -> Object {
    match payload {
        AnimationPayload::Single(values) => {
            let mut bag = Object::with_capacity(4);
            write_geometry(&mut bag, &SINGLE_KEYS, values);
            bag
        }
        AnimationPayload::Transition { current, target } => {
            let mut bag = Object::with_capacity(8);
            write_geometry(&mut bag, &CURRENT_KEYS, current);
            write_geometry(&mut bag, &TARGET_KEYS, target);
            bag
        }
    }
}
