//! Domain layer: value objects, the product aggregate, domain events and the
//! persistence port. No IO happens here.

pub mod aggregates;
pub mod events;
pub mod repositories;
pub mod value_objects;
