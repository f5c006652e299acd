use super::model;
use super::state::{ComboField, EmployeeFormState, FormAction, TextField};
use contracts::domain::a001_employee::ImageMeta;
use contracts::domain::a002_reference_data::ReferenceKind;
use contracts::domain::common::Choice;
use leptos::prelude::*;
use uuid::Uuid;
use web_sys::{File, Url};

/// ViewModel for the employee create form
#[derive(Clone, Copy)]
pub struct EmployeeCreateViewModel {
    pub state: RwSignal<EmployeeFormState>,
    /// Picked photo; browser handles are not `Send`
    pub photo: RwSignal<Option<File>, LocalStorage>,
    /// Object URL of the photo for the preview
    pub photo_url: RwSignal<Option<String>>,
}

impl EmployeeCreateViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(EmployeeFormState::new()),
            photo: RwSignal::new_local(None),
            photo_url: RwSignal::new(None),
        }
    }

    pub fn dispatch(&self, action: FormAction) {
        self.state.update(|s| s.reduce(action));
    }

    /// Spawn every reference-data request; each list fills in on its own
    pub fn load_reference_data(&self) {
        for kind in ReferenceKind::ALL {
            let state = self.state;
            wasm_bindgen_futures::spawn_local(async move {
                let action = match model::fetch_reference(kind).await {
                    Ok(list) => {
                        log::debug!("loaded {} {}", list.len(), kind.path());
                        FormAction::ReferenceLoaded(kind, list)
                    }
                    Err(e) => {
                        log::error!("failed to load {}: {}", kind.path(), e);
                        FormAction::ReferenceFailed(kind, e)
                    }
                };
                state.update(|s| s.reduce(action));
            });
        }
    }

    pub fn text(&self, field: TextField) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| field.display(&s.draft)))
    }

    pub fn set_text(&self, field: TextField) -> Callback<String> {
        let vm = *self;
        Callback::new(move |value: String| vm.dispatch(FormAction::SetText(field, value)))
    }

    pub fn field_error(&self, name: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.field_error(name)))
    }

    pub fn set_photo(&self, file: Option<File>) {
        self.release_preview();
        let meta = file.as_ref().map(|f| ImageMeta {
            file_name: f.name(),
            media_type: f.type_(),
            size: f.size() as u64,
        });
        let url = file
            .as_ref()
            .and_then(|f| Url::create_object_url_with_blob(f).ok());
        self.photo_url.set(url);
        self.photo.set(file);
        self.dispatch(FormAction::SetImage(meta));
    }

    /// Revoke the preview URL; a no-op once the page has been disposed
    pub fn release_preview(&self) {
        if let Some(url) = self.photo_url.try_get_untracked().flatten() {
            let _ = Url::revoke_object_url(&url);
        }
    }

    pub fn select(&self, field: ComboField, choice: Choice) {
        self.dispatch(FormAction::Select(field, choice));
    }

    /// Resolve a slot's current position before addressing it
    pub fn with_slot(&self, key: Uuid, action: impl FnOnce(usize) -> FormAction) {
        let index = self.state.with_untracked(|s| s.insurance.position(key));
        if let Some(index) = index {
            self.dispatch(action(index));
        }
    }

    /// Validate and send the form
    pub fn submit_command(&self) {
        let record = self.state.try_update(|s| s.begin_submit()).flatten();
        let Some(record) = record else {
            log::warn!("submit rejected: invalid form or request in flight");
            return;
        };

        let vm = *self;
        let photo = self.photo.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::store_employee(&record, photo).await;
            match &outcome {
                Ok(status) => {
                    log::info!("employee stored: {}", status.message);
                    vm.release_preview();
                    vm.photo_url.set(None);
                    vm.photo.set(None);
                }
                Err(errors) => log::error!("employee not stored: {:?}", errors),
            }
            vm.state.update(|s| s.finish_submit(outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_release_preview_after_dispose() {
        let owner = Owner::new();
        let vm = owner.with(EmployeeCreateViewModel::new);
        owner.with(|| assert_eq!(vm.photo_url.get_untracked(), None));

        owner.cleanup();
        drop(owner);

        vm.release_preview();
        assert_eq!(vm.photo_url.try_get_untracked(), None);
        assert!(vm.state.try_update(|s| s.begin_submit()).is_none());
    }
}
