use crate::metrics::{width_of_text, CharWidth};
use crate::{LabelId, LayoutError, Px};
use std::collections::HashMap;

/// The text of an entity or relation label, together with how wide it renders
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: LabelId,
    pub text: String,
    pub width: Px,
}

impl Label {
    pub fn new<S: ToString>(id: LabelId, text: S, width: Px) -> Label {
        Label {
            id,
            text: text.to_string(),
            width,
        }
    }
}

/// Labels keyed by id
#[derive(Debug, Clone, Default)]
pub struct LabelList {
    labels: HashMap<LabelId, Label>,
}

impl LabelList {
    pub fn new<I: IntoIterator<Item = Label>>(labels: I) -> LabelList {
        LabelList {
            labels: labels.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    /// Build labels from their text, measuring each one with `metrics`
    pub fn measured<I, S, M>(labels: I, metrics: &M) -> LabelList
    where
        I: IntoIterator<Item = (LabelId, S)>,
        S: ToString,
        M: CharWidth + ?Sized,
    {
        LabelList::new(labels.into_iter().map(|(id, text)| {
            let text = text.to_string();
            let width = width_of_text(&text, metrics);
            Label { id, text, width }
        }))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get_by_id(&self, id: LabelId) -> Result<&Label, LayoutError> {
        self.labels.get(&id).ok_or(LayoutError::LabelNotFound(id))
    }

    /// Width of the widest of the given labels, [Px::ZERO] if there are none
    pub fn max_label_width<I: IntoIterator<Item = LabelId>>(
        &self,
        ids: I,
    ) -> Result<Px, LayoutError> {
        ids.into_iter().try_fold(Px::ZERO, |widest, id| {
            Ok(widest.max(self.get_by_id(id)?.width))
        })
    }
}
