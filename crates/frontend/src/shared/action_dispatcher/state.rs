//! Состояние диспетчера действий и чистые функции переходов.
//!
//! Тип не зависит от Leptos: реактивная обёртка живёт в `dispatcher.rs`,
//! а здесь только `transition`/`reduce`, которые тестируются без DOM.

use super::navigator::Navigator;
use contracts::shared::actions::ActionDescriptorDto;
use thiserror::Error;

/// Вид действия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Navigate,
    Modal,
    Wizard,
}

impl ActionKind {
    pub fn code(&self) -> &'static str {
        match self {
            ActionKind::Navigate => "navigate",
            ActionKind::Modal => "modal",
            ActionKind::Wizard => "wizard",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "navigate" => Some(ActionKind::Navigate),
            "modal" => Some(ActionKind::Modal),
            "wizard" => Some(ActionKind::Wizard),
            _ => None,
        }
    }
}

/// Закрытый перечень модальных сценариев
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKey {
    AddStock,
    IssueStock,
    TransferStock,
    AdjustStock,
    StockCount,
    CreateItem,
    EditItem,
    RemoveItem,
    CreateWarehouse,
    EditWarehouse,
    RemoveWarehouse,
}

impl ModalKey {
    /// Ключ в декларативных описаниях (camelCase)
    pub fn code(&self) -> &'static str {
        match self {
            ModalKey::AddStock => "addStock",
            ModalKey::IssueStock => "issueStock",
            ModalKey::TransferStock => "transferStock",
            ModalKey::AdjustStock => "adjustStock",
            ModalKey::StockCount => "stockCount",
            ModalKey::CreateItem => "createItem",
            ModalKey::EditItem => "editItem",
            ModalKey::RemoveItem => "removeItem",
            ModalKey::CreateWarehouse => "createWarehouse",
            ModalKey::EditWarehouse => "editWarehouse",
            ModalKey::RemoveWarehouse => "removeWarehouse",
        }
    }

    /// Заголовок модального окна
    pub fn display_name(&self) -> &'static str {
        match self {
            ModalKey::AddStock => "Поступление на склад",
            ModalKey::IssueStock => "Выдача со склада",
            ModalKey::TransferStock => "Перемещение между складами",
            ModalKey::AdjustStock => "Корректировка остатка",
            ModalKey::StockCount => "Инвентаризация",
            ModalKey::CreateItem => "Новая позиция",
            ModalKey::EditItem => "Редактирование позиции",
            ModalKey::RemoveItem => "Удаление позиций",
            ModalKey::CreateWarehouse => "Новый склад",
            ModalKey::EditWarehouse => "Редактирование склада",
            ModalKey::RemoveWarehouse => "Удаление складов",
        }
    }

    pub fn all() -> Vec<ModalKey> {
        vec![
            ModalKey::AddStock,
            ModalKey::IssueStock,
            ModalKey::TransferStock,
            ModalKey::AdjustStock,
            ModalKey::StockCount,
            ModalKey::CreateItem,
            ModalKey::EditItem,
            ModalKey::RemoveItem,
            ModalKey::CreateWarehouse,
            ModalKey::EditWarehouse,
            ModalKey::RemoveWarehouse,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ModalKey::all().into_iter().find(|key| key.code() == code)
    }
}

/// Как был открыт сценарий
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowMode {
    #[default]
    Modal,
    /// Пошаговый режим
    Wizard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate {
        target: String,
    },
    Modal {
        key: ModalKey,
        action: Option<String>,
    },
    Wizard {
        key: ModalKey,
        action: Option<String>,
    },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Navigate { .. } => ActionKind::Navigate,
            Action::Modal { .. } => ActionKind::Modal,
            Action::Wizard { .. } => ActionKind::Wizard,
        }
    }
}

/// Типизированное описание действия кнопки
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub label: String,
    pub action: Action,
}

impl ActionDescriptor {
    pub fn navigate(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: Action::Navigate {
                target: target.into(),
            },
        }
    }

    pub fn modal(label: impl Into<String>, key: ModalKey) -> Self {
        Self {
            label: label.into(),
            action: Action::Modal { key, action: None },
        }
    }

    pub fn wizard(label: impl Into<String>, key: ModalKey) -> Self {
        Self {
            label: label.into(),
            action: Action::Wizard { key, action: None },
        }
    }

    /// Параметр сценария (например, id редактируемой записи).
    /// Для `Navigate` не применяется.
    pub fn with_action(mut self, value: impl Into<String>) -> Self {
        match &mut self.action {
            Action::Modal { action, .. } | Action::Wizard { action, .. } => {
                *action = Some(value.into());
            }
            Action::Navigate { .. } => {}
        }
        self
    }

    /// Обратное преобразование в декларативную форму
    pub fn to_dto(&self) -> ActionDescriptorDto {
        match &self.action {
            Action::Navigate { target } => ActionDescriptorDto::navigate(&self.label, target),
            Action::Modal { key, action } => {
                let dto = ActionDescriptorDto::modal(&self.label, key.code());
                ActionDescriptorDto {
                    action: action.clone(),
                    ..dto
                }
            }
            Action::Wizard { key, action } => {
                let dto = ActionDescriptorDto::wizard(&self.label, key.code());
                ActionDescriptorDto {
                    action: action.clone(),
                    ..dto
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("unrecognized action kind `{0}`")]
    UnknownKind(String),
    #[error("unregistered modal key `{0}`")]
    UnknownModalKey(String),
    #[error("navigate action `{label}` has no target")]
    MissingTarget { label: String },
    #[error("{kind} action `{label}` has no modal key")]
    MissingModalKey { label: String, kind: &'static str },
}

impl TryFrom<&ActionDescriptorDto> for ActionDescriptor {
    type Error = ActionError;

    fn try_from(dto: &ActionDescriptorDto) -> Result<Self, Self::Error> {
        let kind = ActionKind::from_code(&dto.kind)
            .ok_or_else(|| ActionError::UnknownKind(dto.kind.clone()))?;

        let action = match kind {
            ActionKind::Navigate => {
                let target = dto
                    .target
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| ActionError::MissingTarget {
                        label: dto.label.clone(),
                    })?;
                Action::Navigate {
                    target: target.to_string(),
                }
            }
            ActionKind::Modal | ActionKind::Wizard => {
                let code = dto
                    .modal_key
                    .as_deref()
                    .ok_or_else(|| ActionError::MissingModalKey {
                        label: dto.label.clone(),
                        kind: kind.code(),
                    })?;
                let key = ModalKey::from_code(code)
                    .ok_or_else(|| ActionError::UnknownModalKey(code.to_string()))?;
                let action = dto.action.clone();
                if kind == ActionKind::Wizard {
                    Action::Wizard { key, action }
                } else {
                    Action::Modal { key, action }
                }
            }
        };

        Ok(Self {
            label: dto.label.clone(),
            action,
        })
    }
}

/// Открытый в данный момент сценарий
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveModal {
    pub key: ModalKey,
    pub mode: WorkflowMode,
    pub action: Option<String>,
}

/// Состояние диспетчера: `None` — Idle, `Some` — ровно один открытый сценарий
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatcherState {
    pub active: Option<ActiveModal>,
    /// Счётчик открытий, растёт при каждом `Open` и не сбрасывается
    opened: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchEvent {
    Open(ActiveModal),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: DispatcherState,
    pub effect: Option<SideEffect>,
}

/// Open replaces whatever was active; there is no stack.
pub fn reduce(state: DispatcherState, event: DispatchEvent) -> DispatcherState {
    match event {
        DispatchEvent::Open(modal) => {
            if let Some(previous) = state.active {
                log::debug!(
                    "modal `{}` replaced by `{}`",
                    previous.key.code(),
                    modal.key.code()
                );
            }
            DispatcherState {
                active: Some(modal),
                opened: state.opened.wrapping_add(1),
            }
        }
        DispatchEvent::Close => DispatcherState {
            active: None,
            opened: state.opened,
        },
    }
}

pub fn transition(state: &DispatcherState, action: &Action) -> Transition {
    match action {
        Action::Navigate { target } => Transition {
            next: state.clone(),
            effect: Some(SideEffect::Navigate(target.clone())),
        },
        Action::Modal { key, action } => Transition {
            next: reduce(
                state.clone(),
                DispatchEvent::Open(ActiveModal {
                    key: *key,
                    mode: WorkflowMode::Modal,
                    action: action.clone(),
                }),
            ),
            effect: None,
        },
        Action::Wizard { key, action } => Transition {
            next: reduce(
                state.clone(),
                DispatchEvent::Open(ActiveModal {
                    key: *key,
                    mode: WorkflowMode::Wizard,
                    action: action.clone(),
                }),
            ),
            effect: None,
        },
    }
}

impl DispatcherState {
    pub fn active_modal_key(&self) -> Option<ModalKey> {
        self.active.as_ref().map(|m| m.key)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    pub fn dispatch(&mut self, action: &Action, navigator: &dyn Navigator) {
        let Transition { next, effect } = transition(self, action);
        *self = next;
        if let Some(SideEffect::Navigate(route)) = effect {
            navigator.navigate_to(&route);
        }
    }

    /// Разбор и выполнение декларативного действия.
    ///
    /// При ошибке состояние не меняется и навигации не происходит.
    pub fn dispatch_descriptor(
        &mut self,
        dto: &ActionDescriptorDto,
        navigator: &dyn Navigator,
    ) -> Result<(), ActionError> {
        let descriptor = ActionDescriptor::try_from(dto)?;
        self.dispatch(&descriptor.action, navigator);
        Ok(())
    }

    pub fn close(&mut self) {
        *self = reduce(std::mem::take(self), DispatchEvent::Close);
    }

    /// Номер текущего открытия, `None` в Idle
    pub fn open_generation(&self) -> Option<u64> {
        self.active.as_ref().map(|_| self.opened)
    }

    /// Закрыть, только если с момента `generation` сценарий не открывали заново.
    pub fn close_if_current(&mut self, generation: u64) -> bool {
        if self.open_generation() != Some(generation) {
            return false;
        }
        self.close();
        true
    }
}
