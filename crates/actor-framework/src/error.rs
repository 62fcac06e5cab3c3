//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself. Entity specific failures are
//! carried opaquely in [`FrameworkError::EntityError`] and recovered by the
//! resource client through [`FrameworkError::into_entity_error`].

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error, if this is one.
    ///
    /// Returns `Err(self)` unchanged for transport errors, not-found, or an
    /// entity error of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("widget error: {0}")]
    struct WidgetError(String);

    #[derive(Debug, thiserror::Error)]
    #[error("gadget error")]
    struct GadgetError;

    #[test]
    fn entity_error_downcasts_to_its_own_type() {
        let err = FrameworkError::EntityError(Box::new(WidgetError("boom".into())));
        let typed: WidgetError = err.into_entity_error().unwrap();
        assert_eq!(typed, WidgetError("boom".into()));
    }

    #[test]
    fn foreign_entity_error_is_returned_untouched() {
        let err = FrameworkError::EntityError(Box::new(GadgetError));
        let back = err.into_entity_error::<WidgetError>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: gadget error");
    }

    #[test]
    fn transport_errors_are_not_entity_errors() {
        let back = FrameworkError::ActorClosed
            .into_entity_error::<WidgetError>()
            .unwrap_err();
        assert!(matches!(back, FrameworkError::ActorClosed));
    }
}
