//! SmartSelect: выбор одного или нескольких значений с поиском.
//!
//! Чистое состояние без зависимостей от DOM. Компонент `SmartSelect`
//! хранит `SmartSelectState` в сигнале и прокидывает в него события.

/// Элемент списка выбора
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    Single,
    #[default]
    Multiple,
}

/// Текущий выбор.
///
/// В режиме `Multiple` вектор используется как множество с сохранением
/// порядка вставки: переключение добавляет в конец или удаляет на месте.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<V> {
    Single(Option<V>),
    Multiple(Vec<V>),
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Selection::Multiple(Vec::new())
    }
}

impl<V: PartialEq> Selection<V> {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(None),
            SelectionMode::Multiple => Selection::Multiple(Vec::new()),
        }
    }

    pub fn values(&self) -> &[V] {
        match self {
            Selection::Single(value) => value.as_slice(),
            Selection::Multiple(values) => values.as_slice(),
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        self.values().contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    pub fn single(&self) -> Option<&V> {
        self.values().first()
    }
}

/// Переключить значение.
///
/// `Multiple`: удалить, если выбрано, иначе добавить.
/// `Single`: выбрать безусловно.
pub fn toggle<V: Clone + PartialEq>(
    mode: SelectionMode,
    selected: &Selection<V>,
    value: V,
) -> Selection<V> {
    match mode {
        SelectionMode::Single => Selection::Single(Some(value)),
        SelectionMode::Multiple => {
            let mut values = selected.values().to_vec();
            if let Some(pos) = values.iter().position(|v| *v == value) {
                values.remove(pos);
            } else {
                values.push(value);
            }
            Selection::Multiple(values)
        }
    }
}

/// Текст на кнопке-триггере
pub fn display_label<V: PartialEq>(
    options: &[SelectOption<V>],
    selected: &Selection<V>,
    placeholder: &str,
) -> String {
    let label_of = |value: &V| {
        options
            .iter()
            .find(|opt| opt.value == *value)
            .map(|opt| opt.label.as_str())
    };

    let text = match selected {
        Selection::Single(value) => value
            .as_ref()
            .and_then(label_of)
            .map(str::to_string)
            .unwrap_or_default(),
        Selection::Multiple(values) => values
            .iter()
            .filter_map(label_of)
            .collect::<Vec<_>>()
            .join(", "),
    };

    if text.is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}

/// Видимая часть списка после фильтрации
#[derive(Debug, PartialEq)]
pub enum OptionsView<'a, V> {
    Options(Vec<&'a SelectOption<V>>),
    NoResults,
}

/// Регистронезависимый поиск подстроки в `label`, порядок исходный.
pub fn filter_options<'a, V>(options: &'a [SelectOption<V>], query: &str) -> OptionsView<'a, V> {
    let needle = query.trim().to_lowercase();
    let visible: Vec<&SelectOption<V>> = options
        .iter()
        .filter(|opt| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
        .collect();

    if visible.is_empty() {
        OptionsView::NoResults
    } else {
        OptionsView::Options(visible)
    }
}

/// Запоминание прокрутки списка вокруг переключения.
///
/// `capture` вызывается до изменения выбора, `take_restore` — после
/// перерисовки, и отдаёт сохранённое смещение ровно один раз.
/// Прокрутка, пришедшая между ними, не меняет ожидающее смещение.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMemo {
    last_offset: f64,
    pending_restore: Option<f64>,
}

fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    }
}

impl ScrollMemo {
    pub fn capture(&mut self, offset: f64) {
        self.remember(offset);
        self.pending_restore = Some(self.last_offset);
    }

    /// Track the offset without arming a restore (plain user scrolling).
    pub fn remember(&mut self, offset: f64) {
        self.last_offset = sanitize_offset(offset);
    }

    /// Arm a restore of the last known offset (popover re-opened).
    pub fn rearm(&mut self) {
        self.pending_restore = Some(self.last_offset);
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn has_pending(&self) -> bool {
        self.pending_restore.is_some()
    }

    /// Offset to apply after the re-render, clamped to `[0, max_scroll]`.
    pub fn take_restore(&mut self, max_scroll: f64) -> Option<f64> {
        let offset = self.pending_restore.take()?;
        let restored = offset.min(max_scroll.max(0.0));
        self.last_offset = restored;
        Some(restored)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent<V> {
    TriggerActivated,
    OutsideInteraction,
    QueryChanged(String),
    /// Пользователь прокрутил список
    Scrolled(f64),
    Toggle { value: V, scroll_offset: f64 },
}

/// Локальное состояние взаимодействия одного экземпляра
#[derive(Debug, Clone, PartialEq)]
pub struct SmartSelectState {
    mode: SelectionMode,
    pub is_open: bool,
    pub query: String,
    pub scroll: ScrollMemo,
}

impl SmartSelectState {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            is_open: false,
            query: String::new(),
            scroll: ScrollMemo::default(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Применить событие; возвращает новый выбор для `on_change`, если он есть.
    pub fn apply<V: Clone + PartialEq>(
        &mut self,
        event: SelectEvent<V>,
        selected: &Selection<V>,
    ) -> Option<Selection<V>> {
        match event {
            SelectEvent::TriggerActivated => {
                self.is_open = !self.is_open;
                if self.is_open {
                    self.scroll.rearm();
                }
                None
            }
            SelectEvent::OutsideInteraction => {
                self.is_open = false;
                None
            }
            SelectEvent::QueryChanged(query) => {
                self.query = query;
                None
            }
            SelectEvent::Scrolled(offset) => {
                self.scroll.remember(offset);
                None
            }
            SelectEvent::Toggle {
                value,
                scroll_offset,
            } => {
                match self.mode {
                    SelectionMode::Multiple => self.scroll.capture(scroll_offset),
                    SelectionMode::Single => self.is_open = false,
                }
                Some(toggle(self.mode, selected, value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warehouses() -> Vec<SelectOption<u32>> {
        vec![
            SelectOption::new(1, "Warehouse A"),
            SelectOption::new(2, "Office"),
            SelectOption::new(3, "Warehouse B"),
        ]
    }

    fn sorted(selection: &Selection<u32>) -> Vec<u32> {
        let mut values = selection.values().to_vec();
        values.sort();
        values
    }

    #[test]
    fn test_multiple_toggle_is_its_own_inverse() {
        let starts = [vec![], vec![1], vec![2, 3], vec![3, 1, 2]];
        for start in starts {
            let original = Selection::Multiple(start.clone());
            for v in [1, 2, 3, 42] {
                let once = toggle(SelectionMode::Multiple, &original, v);
                let twice = toggle(SelectionMode::Multiple, &once, v);
                assert_eq!(sorted(&twice), sorted(&original), "start={:?} v={}", start, v);
            }
        }
    }

    #[test]
    fn test_multiple_toggle_keeps_order_of_others() {
        let selected = Selection::Multiple(vec![3, 1, 2]);
        assert_eq!(
            toggle(SelectionMode::Multiple, &selected, 1),
            Selection::Multiple(vec![3, 2])
        );
        assert_eq!(
            toggle(SelectionMode::Multiple, &selected, 7),
            Selection::Multiple(vec![3, 1, 2, 7])
        );
    }

    #[test]
    fn test_single_toggle_always_selects() {
        let selected = Selection::Single(Some(2));
        assert_eq!(
            toggle(SelectionMode::Single, &selected, 2),
            Selection::Single(Some(2))
        );
        assert_eq!(
            toggle(SelectionMode::Single, &Selection::Single(None), 1),
            Selection::Single(Some(1))
        );
    }

    #[test]
    fn test_multiple_toggle_keeps_popover_open() {
        let mut state = SmartSelectState::new(SelectionMode::Multiple);
        state.apply::<u32>(SelectEvent::TriggerActivated, &Selection::default());
        assert!(state.is_open);

        let change = state.apply(
            SelectEvent::Toggle {
                value: 2,
                scroll_offset: 0.0,
            },
            &Selection::Multiple(vec![1]),
        );
        assert_eq!(change, Some(Selection::Multiple(vec![1, 2])));
        assert!(state.is_open);
    }

    #[test]
    fn test_single_toggle_closes_popover() {
        let mut state = SmartSelectState::new(SelectionMode::Single);
        state.apply::<u32>(SelectEvent::TriggerActivated, &Selection::Single(None));
        let change = state.apply(
            SelectEvent::Toggle {
                value: 3,
                scroll_offset: 120.0,
            },
            &Selection::Single(None),
        );
        assert_eq!(change, Some(Selection::Single(Some(3))));
        assert!(!state.is_open);
        assert_eq!(state.scroll.last_offset(), 0.0);
    }

    #[test]
    fn test_open_close_and_query_survive_reopen() {
        let mut state = SmartSelectState::new(SelectionMode::Multiple);
        let selected = Selection::<u32>::default();
        state.apply(SelectEvent::TriggerActivated, &selected);
        state.apply(SelectEvent::QueryChanged("ware".to_string()), &selected);
        state.apply(
            SelectEvent::Toggle {
                value: 1,
                scroll_offset: 36.0,
            },
            &selected,
        );
        state.apply(SelectEvent::OutsideInteraction, &selected);
        assert!(!state.is_open);

        state.apply(SelectEvent::TriggerActivated, &selected);
        assert!(state.is_open);
        assert_eq!(state.query, "ware");
        assert_eq!(state.scroll.last_offset(), 36.0);

        state.apply(SelectEvent::TriggerActivated, &selected);
        assert!(!state.is_open);
    }

    #[test]
    fn test_scroll_offset_restored_after_toggle() {
        let max_scroll = 480.0;
        for offset in [0.0, 1.0, 123.5, 479.0, 480.0] {
            let mut state = SmartSelectState::new(SelectionMode::Multiple);
            state.apply(
                SelectEvent::Toggle {
                    value: 1u32,
                    scroll_offset: offset,
                },
                &Selection::default(),
            );
            assert_eq!(state.scroll.take_restore(max_scroll), Some(offset));
            assert_eq!(state.scroll.take_restore(max_scroll), None);
        }
    }

    #[test]
    fn test_reopen_restores_last_scrolled_offset() {
        let mut state = SmartSelectState::new(SelectionMode::Multiple);
        let selected = Selection::<u32>::default();
        state.apply(SelectEvent::TriggerActivated, &selected);
        assert_eq!(state.scroll.take_restore(500.0), Some(0.0));

        state.apply(SelectEvent::Scrolled(210.0), &selected);
        assert!(!state.scroll.has_pending());
        state.apply(SelectEvent::OutsideInteraction, &selected);

        state.apply(SelectEvent::TriggerActivated, &selected);
        assert_eq!(state.scroll.take_restore(500.0), Some(210.0));
    }

    #[test]
    fn test_scroll_between_toggle_and_restore_keeps_captured_offset() {
        let mut state = SmartSelectState::new(SelectionMode::Multiple);
        let selected = Selection::Multiple(vec![1u32]);
        state.apply(SelectEvent::TriggerActivated, &selected);
        state.scroll.take_restore(1000.0);

        state.apply(
            SelectEvent::Toggle {
                value: 2,
                scroll_offset: 300.0,
            },
            &selected,
        );
        // the re-render clamps the list before the restore runs
        state.apply(SelectEvent::Scrolled(0.0), &selected);

        assert_eq!(state.scroll.take_restore(1000.0), Some(300.0));
        assert_eq!(state.scroll.last_offset(), 300.0);
        assert_eq!(state.scroll.take_restore(1000.0), None);
    }

    #[test]
    fn test_scroll_memo_clamps() {
        let mut memo = ScrollMemo::default();
        memo.capture(-15.0);
        assert_eq!(memo.take_restore(100.0), Some(0.0));

        memo.capture(900.0);
        assert_eq!(memo.take_restore(250.0), Some(250.0));

        memo.capture(f64::NAN);
        assert_eq!(memo.take_restore(250.0), Some(0.0));

        assert_eq!(ScrollMemo::default().take_restore(100.0), None);
    }

    #[test]
    fn test_display_label_multiple() {
        let options = warehouses();
        assert_eq!(
            display_label(&options, &Selection::Multiple(vec![]), "Все склады"),
            "Все склады"
        );
        assert_eq!(
            display_label(&options, &Selection::Multiple(vec![1]), "Все склады"),
            "Warehouse A"
        );
        assert_eq!(
            display_label(&options, &Selection::Multiple(vec![3, 1]), "Все склады"),
            "Warehouse B, Warehouse A"
        );
    }

    #[test]
    fn test_display_label_skips_missing_values() {
        let options = warehouses();
        assert_eq!(
            display_label(&options, &Selection::Multiple(vec![99, 2]), "-"),
            "Office"
        );
        assert_eq!(display_label(&options, &Selection::Multiple(vec![99]), "-"), "-");
        assert_eq!(display_label(&options, &Selection::Single(Some(99)), "-"), "-");
    }

    #[test]
    fn test_display_label_single() {
        let options = warehouses();
        assert_eq!(
            display_label(&options, &Selection::Single(Some(2)), "Склад"),
            "Office"
        );
        assert_eq!(display_label(&options, &Selection::Single(None), "Склад"), "Склад");
    }

    #[test]
    fn test_duplicate_values_first_label_wins() {
        let options = vec![SelectOption::new(1, "First"), SelectOption::new(1, "Second")];
        assert_eq!(display_label(&options, &Selection::Single(Some(1)), "-"), "First");
        assert_eq!(
            display_label(&options, &Selection::Multiple(vec![1]), "-"),
            "First"
        );
    }

    #[test]
    fn test_toggle_missing_value_does_not_panic() {
        let selected = Selection::Multiple(vec![99]);
        assert_eq!(
            toggle(SelectionMode::Multiple, &selected, 99),
            Selection::Multiple(vec![])
        );
    }

    #[test]
    fn test_filter_ware() {
        let options = vec![SelectOption::new(1, "Warehouse A"), SelectOption::new(2, "Office")];
        match filter_options(&options, "ware") {
            OptionsView::Options(visible) => {
                let values: Vec<u32> = visible.iter().map(|o| o.value).collect();
                assert_eq!(values, vec![1]);
            }
            OptionsView::NoResults => panic!("expected matches"),
        }
    }

    #[test]
    fn test_filter_no_results() {
        let options = warehouses();
        assert_eq!(filter_options(&options, "zzz"), OptionsView::NoResults);
        assert_eq!(filter_options::<u32>(&[], ""), OptionsView::NoResults);
    }

    #[test]
    fn test_filter_keeps_order_and_ignores_case() {
        let options = warehouses();
        match filter_options(&options, "  WAREHOUSE ") {
            OptionsView::Options(visible) => {
                let values: Vec<u32> = visible.iter().map(|o| o.value).collect();
                assert_eq!(values, vec![1, 3]);
            }
            OptionsView::NoResults => panic!("expected matches"),
        }
        match filter_options(&options, "") {
            OptionsView::Options(visible) => assert_eq!(visible.len(), 3),
            OptionsView::NoResults => panic!("empty query shows everything"),
        }
    }

    #[test]
    fn test_filter_cyrillic() {
        let options = vec![
            SelectOption::new(1, "Основной склад"),
            SelectOption::new(2, "Офис"),
        ];
        match filter_options(&options, "СКЛАД") {
            OptionsView::Options(visible) => assert_eq!(visible[0].value, 1),
            OptionsView::NoResults => panic!("expected matches"),
        }
    }
}
