//! Selection Controller — явный выбор картины пользователем
//!
//! # Events
//! - `InteractRequested` (Enter): выбрать nearest, если ничего не выбрано
//! - `SelectPainting { id }` (клик по prompt / по картине)
//! - `CycleSelection { forward }` (стрелки, пока selection открыт)
//! - `DismissSelection` (Escape / закрытие диалога)
//!
//! Пишет только `SelectedPainting`. Camera переключается в zoom mode сама,
//! глядя на этот resource.

use bevy::prelude::*;

use crate::logger;
use crate::state::{NearestPainting, PaintingRegistry, SelectedPainting};

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct InteractRequested;

#[derive(Event, Debug, Clone)]
pub struct SelectPainting {
    pub id: String,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct CycleSelection {
    /// true = Next, false = Prev
    pub forward: bool,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct DismissSelection;

/// Event: selection сменился (UI открывает/закрывает диалог)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SelectionChanged {
    pub current: Option<String>,
}

/// Запрос на изменение selection (порядок = порядок событий в кадре)
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionRequest {
    Interact,
    Select(String),
    Cycle { forward: bool },
    Dismiss,
}

/// Применить один запрос; возвращает новый selection (`None` = без изменений)
///
/// Внешний `Option`: "изменилось ли", внутренний: новое значение.
pub fn resolve_request(
    request: &SelectionRequest,
    current: &SelectedPainting,
    nearest: &NearestPainting,
    registry: &PaintingRegistry,
) -> Option<SelectedPainting> {
    match request {
        SelectionRequest::Interact => {
            if current.0.is_some() {
                return None;
            }
            let painting = nearest.0.as_ref()?;
            Some(SelectedPainting(Some(painting.clone())))
        }
        SelectionRequest::Select(id) => match registry.get(id) {
            Some(painting) => Some(SelectedPainting(Some(painting.clone()))),
            None => {
                logger::log_warning(&format!("SelectPainting: unknown painting id '{}'", id));
                None
            }
        },
        SelectionRequest::Cycle { forward } => {
            // Стрелки работают только в открытом диалоге
            let id = current.id()?;
            let painting = registry.cycle_from(id, *forward)?;
            Some(SelectedPainting(Some(painting.clone())))
        }
        SelectionRequest::Dismiss => {
            current.0.as_ref()?;
            Some(SelectedPainting(None))
        }
    }
}

/// Система: selection events → SelectedPainting
pub fn apply_selection_requests(
    mut interact: EventReader<InteractRequested>,
    mut select: EventReader<SelectPainting>,
    mut cycle: EventReader<CycleSelection>,
    mut dismiss: EventReader<DismissSelection>,
    nearest: Res<NearestPainting>,
    registry: Res<PaintingRegistry>,
    mut selected: ResMut<SelectedPainting>,
    mut changed: EventWriter<SelectionChanged>,
) {
    // Порядок внутри кадра: interact → select → cycle → dismiss
    let mut requests: Vec<SelectionRequest> = Vec::new();
    requests.extend(interact.read().map(|_| SelectionRequest::Interact));
    requests.extend(select.read().map(|e| SelectionRequest::Select(e.id.clone())));
    requests.extend(cycle.read().map(|e| SelectionRequest::Cycle { forward: e.forward }));
    requests.extend(dismiss.read().map(|_| SelectionRequest::Dismiss));

    if requests.is_empty() {
        return;
    }

    let mut next = selected.clone();
    for request in &requests {
        if let Some(resolved) = resolve_request(request, &next, &nearest, &registry) {
            next = resolved;
        }
    }

    if *selected != next {
        logger::log_info(&format!("Selected painting: {:?} → {:?}", selected.id(), next.id()));
        changed.write(SelectionChanged {
            current: next.id().map(str::to_owned),
        });
        *selected = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Painting;

    fn registry() -> PaintingRegistry {
        let mut registry = PaintingRegistry::default();
        for (i, id) in ["painting-1", "painting-2", "painting-3"].iter().enumerate() {
            registry.register(Painting::new(*id, Vec3::new(i as f32 * 5.0, 2.5, -14.9), Vec3::ZERO, *id, ""));
        }
        registry
    }

    #[test]
    fn test_interact_selects_nearest() {
        let registry = registry();
        let nearest = NearestPainting(registry.get("painting-2").cloned());

        let result = resolve_request(&SelectionRequest::Interact, &SelectedPainting::default(), &nearest, &registry);
        assert_eq!(result.and_then(|s| s.0).map(|p| p.id), Some("painting-2".to_string()));
    }

    #[test]
    fn test_interact_without_nearest_does_nothing() {
        let registry = registry();
        let result = resolve_request(
            &SelectionRequest::Interact,
            &SelectedPainting::default(),
            &NearestPainting::default(),
            &registry,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_interact_ignored_while_selected() {
        let registry = registry();
        let current = SelectedPainting(registry.get("painting-1").cloned());
        let nearest = NearestPainting(registry.get("painting-2").cloned());

        assert!(resolve_request(&SelectionRequest::Interact, &current, &nearest, &registry).is_none());
    }

    #[test]
    fn test_cycle_wraps_and_requires_selection() {
        let registry = registry();
        let current = SelectedPainting(registry.get("painting-3").cloned());

        let next = resolve_request(&SelectionRequest::Cycle { forward: true }, &current, &NearestPainting::default(), &registry);
        assert_eq!(next.and_then(|s| s.0).map(|p| p.id), Some("painting-1".to_string()));

        let none = resolve_request(
            &SelectionRequest::Cycle { forward: true },
            &SelectedPainting::default(),
            &NearestPainting::default(),
            &registry,
        );
        assert!(none.is_none());
    }

    #[test]
    fn test_unknown_id_ignored() {
        let registry = registry();
        let result = resolve_request(
            &SelectionRequest::Select("missing".to_string()),
            &SelectedPainting::default(),
            &NearestPainting::default(),
            &registry,
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_dismiss_clears() {
        let registry = registry();
        let current = SelectedPainting(registry.get("painting-1").cloned());

        let result = resolve_request(&SelectionRequest::Dismiss, &current, &NearestPainting::default(), &registry);
        assert_eq!(result, Some(SelectedPainting(None)));
    }
}
