use std::any::Any;

/// Marker for values that can live inside a [`StateCtx`](crate::StateCtx).
///
/// Anything `'static` can be a state; the trait exists so registration is an
/// explicit decision at the type's definition site.
pub trait State: Any {}
