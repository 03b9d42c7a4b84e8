//! Recipe form plus its submission request.

use std::fmt;
use std::future::Future;

use pantry_core::entities::Recipe;

use crate::async_state::{AsyncState, AsyncTask};
use crate::form::{FormAction, RecipeForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Recipe),
    Updated(Recipe),
    Failed { kind: SubmitKind, message: String },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Notification text for this outcome.
    #[must_use]
    pub fn toast_message(&self) -> String {
        match self {
            Self::Created(_) => "Recipe saved successfully!".to_string(),
            Self::Updated(_) => "Recipe updated successfully!".to_string(),
            Self::Failed {
                kind: SubmitKind::Create,
                message,
            } => format!("Could not save recipe: {message}"),
            Self::Failed {
                kind: SubmitKind::Update,
                message,
            } => format!("Could not update recipe: {message}"),
        }
    }
}

/// Owns a [`RecipeForm`] and the request that submits it.
///
/// A successful create resets the form. A successful update leaves it as is.
/// A failure leaves the form untouched so the user can retry.
#[derive(Debug, Default)]
pub struct RecipeEditor {
    pub form: RecipeForm,
    submission: AsyncTask<Recipe>,
}

impl RecipeEditor {
    #[must_use]
    pub fn new(form: RecipeForm) -> Self {
        Self {
            form,
            submission: AsyncTask::new(),
        }
    }

    pub fn dispatch(&mut self, action: FormAction) {
        self.form.dispatch(action);
    }

    #[must_use]
    pub fn submission(&self) -> AsyncState<Recipe> {
        self.submission.snapshot()
    }

    /// Submit via `persist`, which receives the kind of save and the payload.
    pub async fn submit<F, Fut, E>(&mut self, persist: F) -> SubmitOutcome
    where
        F: FnOnce(SubmitKind, Recipe) -> Fut,
        Fut: Future<Output = Result<Recipe, E>>,
        E: fmt::Display,
    {
        let kind = if self.form.is_editing() {
            SubmitKind::Update
        } else {
            SubmitKind::Create
        };
        let payload = self.form.to_recipe();
        tracing::debug!(?kind, name = %payload.name, "submitting recipe");

        let state = self
            .submission
            .execute(|| persist(kind, payload))
            .await;

        match (state.error, state.data, kind) {
            (Some(message), _, kind) => SubmitOutcome::Failed { kind, message },
            (None, Some(saved), SubmitKind::Create) => {
                self.form.dispatch(FormAction::Saved);
                SubmitOutcome::Created(saved)
            }
            (None, Some(saved), SubmitKind::Update) => SubmitOutcome::Updated(saved),
            (None, None, kind) => SubmitOutcome::Failed {
                kind,
                message: "no recipe returned".to_string(),
            },
        }
    }
}
