use serde_json::{Map, Value};

use crate::{
    config::{ActionKind, ItemAction},
    host::{Host, HostError, ServiceCall},
};

use super::{DispatchError, ValidationFailure};

/// Browsing context used when `url_target` is unset.
pub const DEFAULT_URL_TARGET: &str = "_blank";
/// Domain of the generic toggle service.
pub const TOGGLE_DOMAIN: &str = "homeassistant";
/// Name of the generic toggle service.
pub const TOGGLE_SERVICE: &str = "toggle";

type Handler = fn(&ItemAction, &dyn Host) -> Result<(), DispatchError>;

pub(super) fn handler_for(kind: ActionKind) -> Handler {
    match kind {
        ActionKind::Navigate => navigate,
        ActionKind::Url => open_url,
        ActionKind::Toggle => toggle,
        ActionKind::CallService => call_service,
        ActionKind::MoreInfo => more_info,
    }
}

fn navigate(action: &ItemAction, host: &dyn Host) -> Result<(), DispatchError> {
    let kind = ActionKind::Navigate;
    let path = required(action.navigation_path.as_deref(), kind, "navigation_path")?;

    host.push_location(path).map_err(execution(kind))?;
    host.notify_location_changed().map_err(execution(kind))
}

fn open_url(action: &ItemAction, host: &dyn Host) -> Result<(), DispatchError> {
    let kind = ActionKind::Url;
    let url = required(action.url_path.as_deref(), kind, "url_path")?;
    let target = present(action.url_target.as_deref()).unwrap_or(DEFAULT_URL_TARGET);

    host.open_browsing_context(url, target).map_err(execution(kind))
}

fn toggle(action: &ItemAction, host: &dyn Host) -> Result<(), DispatchError> {
    let kind = ActionKind::Toggle;
    let entity = required(action.entity.as_deref(), kind, "entity")?;

    let mut data = Map::new();
    data.insert("entity_id".to_string(), Value::String(entity.to_string()));

    host.call_service(ServiceCall {
        domain: TOGGLE_DOMAIN.to_string(),
        service: TOGGLE_SERVICE.to_string(),
        data,
        target: Map::new(),
    })
    .map_err(execution(kind))
}

fn call_service(action: &ItemAction, host: &dyn Host) -> Result<(), DispatchError> {
    let kind = ActionKind::CallService;
    let service = required(action.service.as_deref(), kind, "service")?;
    let (domain, service) = split_service(service).ok_or_else(|| DispatchError::Validation {
        action: kind,
        failure: ValidationFailure::InvalidService(service.to_string()),
    })?;

    let data = action
        .service_data
        .clone()
        .or_else(|| action.data.clone())
        .unwrap_or_default();

    let target = match (&action.target, data.get("entity_id")) {
        (Some(target), _) => target.clone(),
        (None, Some(entity_id)) => {
            let mut target = Map::new();
            target.insert("entity_id".to_string(), entity_id.clone());
            target
        }
        (None, None) => Map::new(),
    };

    host.call_service(ServiceCall {
        domain: domain.to_string(),
        service: service.to_string(),
        data,
        target,
    })
    .map_err(execution(kind))
}

fn more_info(action: &ItemAction, host: &dyn Host) -> Result<(), DispatchError> {
    let kind = ActionKind::MoreInfo;
    let entity = required(action.entity.as_deref(), kind, "entity")?;

    host.show_more_info(entity).map_err(execution(kind))
}

/// Splits `domain.service`; anything but two non-empty segments is rejected.
pub(super) fn split_service(service: &str) -> Option<(&str, &str)> {
    let (domain, name) = service.split_once('.')?;
    if domain.is_empty() || name.is_empty() || name.contains('.') {
        return None;
    }
    Some((domain, name))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(
    value: Option<&'a str>,
    action: ActionKind,
    field: &'static str,
) -> Result<&'a str, DispatchError> {
    present(value).ok_or_else(|| DispatchError::missing(action, field))
}

fn execution(action: ActionKind) -> impl Fn(HostError) -> DispatchError {
    move |source| DispatchError::Execution { action, source }
}
