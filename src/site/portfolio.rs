use super::catalog::Project;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<&'static Project>,
}

impl Selection {
    pub fn selected(self) -> Option<&'static Project> {
        self.selected
    }

    pub fn select(project: &'static Project) -> Self {
        Self {
            selected: Some(project),
        }
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    /// Applies a click that landed on the open modal.
    pub fn on_modal_click(self, target: ModalClick) -> Self {
        if target.dismisses() {
            Self::cleared()
        } else {
            self
        }
    }
}

/// Where a click inside the modal layer originated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    CloseButton,
    /// Anywhere inside the dialog card. The card stops propagation so the
    /// backdrop never sees these.
    Body,
}

impl ModalClick {
    pub fn dismisses(self) -> bool {
        !matches!(self, Self::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::catalog::PROJECTS;

    #[test]
    fn selecting_replaces_previous_selection() {
        let first = &PROJECTS[0];
        let second = &PROJECTS[1];

        let selection = Selection::select(first);
        assert_eq!(selection.selected(), Some(first));

        let selection = Selection::select(second);
        assert_eq!(selection.selected(), Some(second));
        assert!(selection.selected().map(|p| p.id) != Some(first.id));
    }

    #[test]
    fn body_click_keeps_modal_open() {
        let selection = Selection::select(&PROJECTS[2]);

        let after = selection.on_modal_click(ModalClick::Body);
        assert!(after.selected().is_some());
        assert_eq!(after, selection);
    }

    #[test]
    fn backdrop_and_close_button_dismiss() {
        let selection = Selection::select(&PROJECTS[2]);

        assert_eq!(selection.on_modal_click(ModalClick::Backdrop), Selection::cleared());
        assert_eq!(selection.on_modal_click(ModalClick::CloseButton), Selection::cleared());
    }

    #[test]
    fn clear_on_empty_selection_is_harmless() {
        let selection = Selection::cleared().on_modal_click(ModalClick::Backdrop);
        assert_eq!(selection.selected(), None);
    }
}
