use contracts::domain::a001_product::ProductOption;

/// Тексты виджета. Каждый можно переопределить.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableSelectConfig {
    pub placeholder: String,
    pub search_placeholder: String,
    pub no_results_text: String,
}

impl Default for SearchableSelectConfig {
    fn default() -> Self {
        Self {
            placeholder: "Chọn sản phẩm...".to_string(),
            search_placeholder: "Tìm kiếm sản phẩm...".to_string(),
            no_results_text: "Không tìm thấy sản phẩm".to_string(),
        }
    }
}

impl SearchableSelectConfig {
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn with_search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = text.into();
        self
    }

    pub fn with_no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }
}

fn matches(item: &ProductOption, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle) || item.price.to_string().contains(needle)
}

/// Отфильтровать товары по названию или цене (как строке), без учёта регистра.
///
/// Пустой или пробельный текст возвращает весь список. Порядок сохраняется.
pub fn filter_items(items: &[ProductOption], text: &str) -> Vec<ProductOption> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect()
}

/// Строка выпадающего списка
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownRow {
    Item(ProductOption),
    /// Невыбираемая заглушка «ничего не найдено»
    NoResults(String),
}

/// Результат обработки клавиши
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    pub selected: Option<ProductOption>,
}

/// Состояние одного экземпляра выпадающего списка
#[derive(Debug, Clone, PartialEq)]
pub struct SearchableSelectState {
    config: SearchableSelectConfig,
    data: Vec<ProductOption>,
    filtered: Vec<ProductOption>,
    selected: Option<ProductOption>,
    is_open: bool,
    filter_text: String,
    highlighted: Option<usize>,
}

impl Default for SearchableSelectState {
    fn default() -> Self {
        Self::new(SearchableSelectConfig::default())
    }
}

impl SearchableSelectState {
    pub fn new(config: SearchableSelectConfig) -> Self {
        Self {
            config,
            data: Vec::new(),
            filtered: Vec::new(),
            selected: None,
            is_open: false,
            filter_text: String::new(),
            highlighted: None,
        }
    }

    pub fn config(&self) -> &SearchableSelectConfig {
        &self.config
    }

    pub fn data(&self) -> &[ProductOption] {
        &self.data
    }

    pub fn filtered(&self) -> &[ProductOption] {
        &self.filtered
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Заменить список кандидатов. Выбранный товар не сбрасывается,
    /// даже если его больше нет в новых данных.
    pub fn set_data(&mut self, items: Vec<ProductOption>) {
        self.filtered = items.clone();
        self.data = items;
        self.highlighted = None;
    }

    pub fn open(&mut self) {
        self.is_open = true;
        self.filter_text.clear();
        self.filtered = self.data.clone();
        self.highlighted = None;
    }

    /// Ввод при закрытом списке (после выбора или Escape) снова его открывает
    pub fn filter(&mut self, text: &str) {
        self.is_open = true;
        self.filter_text = text.to_string();
        self.filtered = filter_items(&self.data, text);
        self.highlighted = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.filter_text.clear();
        self.highlighted = None;
    }

    pub fn select_item(&mut self, item: ProductOption) {
        self.selected = Some(item);
        self.close();
    }

    pub fn get_value(&self) -> Option<&ProductOption> {
        self.selected.as_ref()
    }

    /// Выбрать товар по id. Если id нет в текущих данных, ничего не меняется.
    /// Callback владельца здесь не вызывается.
    pub fn set_value(&mut self, id: &str) -> Option<ProductOption> {
        let item = self.data.iter().find(|item| item.id == id)?.clone();
        self.selected = Some(item.clone());
        Some(item)
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.filter_text.clear();
        self.filtered = self.data.clone();
        self.highlighted = None;
    }

    /// Текст в поле ввода, когда список закрыт
    pub fn display_text(&self) -> &str {
        self.selected
            .as_ref()
            .map(|item| item.name.as_str())
            .unwrap_or(self.config.placeholder.as_str())
    }

    /// Значение поля ввода: строка поиска при открытом списке,
    /// иначе имя выбранного товара (пусто, если ничего не выбрано)
    pub fn input_value(&self) -> String {
        if self.is_open {
            self.filter_text.clone()
        } else {
            self.selected
                .as_ref()
                .map(|item| item.name.clone())
                .unwrap_or_default()
        }
    }

    pub fn input_placeholder(&self) -> &str {
        if self.is_open {
            &self.config.search_placeholder
        } else {
            self.display_text()
        }
    }

    pub fn rows(&self) -> Vec<DropdownRow> {
        if self.filtered.is_empty() {
            return vec![DropdownRow::NoResults(self.config.no_results_text.clone())];
        }
        self.filtered.iter().cloned().map(DropdownRow::Item).collect()
    }

    /// Клавиши Up/Down/Enter/Escape всегда перехватываются.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        let len = self.filtered.len();
        match key {
            "ArrowDown" => {
                if !self.is_open {
                    self.open();
                } else if len > 0 {
                    self.highlighted = Some(match self.highlighted {
                        Some(pos) => (pos + 1).min(len - 1),
                        None => 0,
                    });
                }
            }
            "ArrowUp" => {
                if self.is_open && len > 0 {
                    self.highlighted = Some(self.highlighted.map_or(0, |pos| pos.saturating_sub(1)));
                }
            }
            "Enter" => {
                let chosen = self
                    .highlighted
                    .filter(|_| self.is_open)
                    .and_then(|pos| self.filtered.get(pos).cloned());
                if let Some(item) = chosen {
                    self.select_item(item.clone());
                    return KeyOutcome {
                        prevent_default: true,
                        selected: Some(item),
                    };
                }
            }
            "Escape" => self.close(),
            _ => return KeyOutcome::default(),
        }
        KeyOutcome {
            prevent_default: true,
            selected: None,
        }
    }
}
