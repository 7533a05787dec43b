// ============================================================================
// PET STORE - Mascotas conocidas por el cliente
// ============================================================================
// El backend solo publica la colección; add/update/delete trabajan sobre la
// lista local.
// ============================================================================

use std::collections::HashSet;
use std::rc::Rc;

use crate::error::{AppError, ValidationError};
use crate::models::{FeatureCollection, Pet, PetMatch};
use crate::services::LostPawApi;
use crate::state::ReactiveState;
use crate::stores::AlertStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetState {
    pub pets: Vec<Pet>,
    pub loading: bool,
    pub error: Option<String>,
    /// Candidatas del último avistamiento reportado
    pub matches: Vec<PetMatch>,
}

#[derive(Clone)]
pub struct PetStore {
    state: ReactiveState<PetState>,
    api: Rc<dyn LostPawApi>,
    alerts: AlertStore,
}

impl PetStore {
    pub fn new(api: Rc<dyn LostPawApi>, alerts: AlertStore) -> Self {
        Self {
            state: ReactiveState::new(PetState::default()),
            api,
            alerts,
        }
    }

    pub fn add(&self, pet: Pet) -> Result<(), AppError> {
        if self.find(pet.id).is_some() {
            return Err(self.fail(AppError::DuplicatePet(pet.id)));
        }
        log::info!("🐾 Mascota añadida {} ({})", pet.id, pet.display_name());
        self.state.update(|state| state.pets.push(pet));
        Ok(())
    }

    /// Reemplaza la lista local por la colección del backend. Si falla, la
    /// lista queda como estaba.
    pub async fn get_all(&self) -> Result<usize, AppError> {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = self
            .api
            .fetch_pets()
            .await
            .and_then(|collection| pets_from_collection(&collection));

        match result {
            Ok(pets) => {
                let count = pets.len();
                log::info!("✅ Mascotas cargadas: {}", count);
                self.state.update(|state| {
                    state.pets = pets;
                    state.loading = false;
                });
                Ok(count)
            }
            Err(e) => {
                log::error!("❌ Error cargando mascotas: {}", e);
                self.state.update(|state| {
                    state.loading = false;
                    state.error = Some(e.to_string());
                });
                self.alerts.error(e.user_message());
                Err(e)
            }
        }
    }

    /// Reemplaza el registro guardado bajo `id`; el registro conserva `id`
    pub fn update(&self, id: u64, mut pet: Pet) -> Result<(), AppError> {
        let Some(index) = self.position(id) else {
            return Err(self.fail(AppError::PetNotFound(id)));
        };
        pet.id = id;
        self.state.update(|state| state.pets[index] = pet);
        Ok(())
    }

    pub fn delete(&self, id: u64) -> Result<Pet, AppError> {
        let Some(index) = self.position(id) else {
            return Err(self.fail(AppError::PetNotFound(id)));
        };
        let mut removed = None;
        self.state.update(|state| removed = Some(state.pets.remove(index)));
        removed.ok_or(AppError::PetNotFound(id))
    }

    /// Envía la foto de una mascota avistada y guarda las coincidencias
    pub async fn report_sighting(
        &self,
        lat: f64,
        lon: f64,
        image: Vec<u8>,
    ) -> Result<Vec<PetMatch>, AppError> {
        self.state.update(|state| {
            state.loading = true;
            state.error = None;
        });

        match self.api.report_sighting(lat, lon, image).await {
            Ok(matches) => {
                log::info!("🔎 Coincidencias del avistamiento: {}", matches.len());
                self.state.update(|state| {
                    state.loading = false;
                    state.matches = matches.clone();
                });
                Ok(matches)
            }
            Err(e) => {
                log::error!("❌ Error en avistamiento: {}", e);
                self.state.update(|state| {
                    state.loading = false;
                    state.error = Some(e.to_string());
                });
                self.alerts.error(e.user_message());
                Err(e)
            }
        }
    }

    pub fn matches(&self) -> Vec<PetMatch> {
        self.state.with(|state| state.matches.clone())
    }

    pub fn pets(&self) -> Vec<Pet> {
        self.state.with(|state| state.pets.clone())
    }

    pub fn find(&self, id: u64) -> Option<Pet> {
        self.state
            .with(|state| state.pets.iter().find(|pet| pet.id == id).cloned())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|state| state.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|state| state.error.clone())
    }

    pub fn state(&self) -> &ReactiveState<PetState> {
        &self.state
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.state
            .with(|state| state.pets.iter().position(|pet| pet.id == id))
    }

    fn fail(&self, error: AppError) -> AppError {
        self.alerts.error(error.user_message());
        error
    }
}

/// Convierte la colección del backend. Los ids propios deben ser únicos; un
/// feature sin id recibe su posición, o el siguiente id libre si está tomada.
fn pets_from_collection(collection: &FeatureCollection) -> Result<Vec<Pet>, AppError> {
    let mut taken = HashSet::new();
    let mut with_id = Vec::with_capacity(collection.features.len());
    for feature in &collection.features {
        if !feature.has_own_id() {
            with_id.push(None);
            continue;
        }
        let pet = Pet::from_feature(0, feature)?;
        if !taken.insert(pet.id) {
            return Err(AppError::DuplicatePet(pet.id));
        }
        with_id.push(Some(pet));
    }

    let mut pets = Vec::with_capacity(with_id.len());
    for (position, (feature, parsed)) in collection.features.iter().zip(with_id).enumerate() {
        let pet = match parsed {
            Some(pet) => pet,
            None => {
                let mut id = position as u64;
                while taken.contains(&id) {
                    id = id
                        .checked_add(1)
                        .ok_or_else(|| ValidationError::invalid("id", "no free id left"))?;
                }
                taken.insert(id);
                Pet::from_feature(id, feature)?
            }
        };
        pets.push(pet);
    }
    Ok(pets)
}
