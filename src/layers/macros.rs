//! Macros to reduce boilerplate in layer implementations

/// Implements the property accessors of [`VisualLayer`](crate::layers::base::VisualLayer)
/// for a struct that stores its [`LayerProperties`](crate::layers::base::LayerProperties)
/// in the named field.
///
/// Usage:
/// ```ignore
/// impl VisualLayer for MyLayer {
///     crate::impl_layer_properties!(properties);
///     fn options(&self) -> serde_json::Value { serde_json::Value::Null }
/// }
/// ```
#[macro_export]
macro_rules! impl_layer_properties {
    ($properties_field:ident) => {
        fn properties(&self) -> &$crate::layers::base::LayerProperties {
            &self.$properties_field
        }

        fn properties_mut(&mut self) -> &mut $crate::layers::base::LayerProperties {
            &mut self.$properties_field
        }
    };
}
