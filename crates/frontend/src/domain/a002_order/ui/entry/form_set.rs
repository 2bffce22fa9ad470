//! Набор форм заказов.
//!
//! Формы хранятся упорядоченным списком дескрипторов; DOM-идентификаторы
//! выводятся из индекса, а не наоборот. После удаления индексы снова
//! плотные `1..=N`.

use contracts::domain::a001_product::ProductOption;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    CustomerName,
    CustomerPhone,
    Address,
    Platform,
    TrackingCode,
    Quantity,
    UnitPrice,
    Note,
}

impl FormField {
    pub fn dom_name(&self) -> &'static str {
        match self {
            FormField::CustomerName => "customerName",
            FormField::CustomerPhone => "customerPhone",
            FormField::Address => "address",
            FormField::Platform => "platform",
            FormField::TrackingCode => "trackingCode",
            FormField::Quantity => "quantity",
            FormField::UnitPrice => "unitPrice",
            FormField::Note => "note",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CustomerName => "Tên khách hàng",
            FormField::CustomerPhone => "Số điện thoại",
            FormField::Address => "Địa chỉ",
            FormField::Platform => "Sàn TMĐT",
            FormField::TrackingCode => "Mã vận đơn",
            FormField::Quantity => "Số lượng",
            FormField::UnitPrice => "Đơn giá",
            FormField::Note => "Ghi chú",
        }
    }
}

/// Ключ рендера встроенного SearchableSelect. Новый ключ = новый виджет.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetInstance(u64);

pub fn field_id(field: FormField, index: usize) -> String {
    format!("{}_{}", field.dom_name(), index)
}

pub fn form_id(index: usize) -> String {
    format!("orderForm_{}", index)
}

/// Исходные данные формы (импорт)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftSeed {
    pub fields: BTreeMap<FormField, String>,
    pub product: Option<ProductOption>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderFormDraft {
    pub index: usize,
    pub instance: WidgetInstance,
    pub fields: BTreeMap<FormField, String>,
    pub product: Option<ProductOption>,
}

impl OrderFormDraft {
    fn empty(index: usize, instance: WidgetInstance) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(FormField::Quantity, "1".to_string());
        Self {
            index,
            instance,
            fields,
            product: None,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn field_id(&self, field: FormField) -> String {
        field_id(field, self.index)
    }

    pub fn form_id(&self) -> String {
        form_id(self.index)
    }

    pub fn label(&self) -> String {
        format!("Đơn hàng #{}", self.index)
    }

    pub fn quantity(&self) -> Option<u32> {
        self.field(FormField::Quantity).trim().parse().ok()
    }

    /// Введённая цена или цена выбранного товара
    pub fn unit_price(&self) -> Option<f64> {
        let raw = self.field(FormField::UnitPrice).trim();
        if raw.is_empty() {
            return self.product.as_ref().map(|p| p.price);
        }
        raw.parse().ok()
    }

    pub fn line_total(&self) -> f64 {
        match (self.product.as_ref(), self.quantity(), self.unit_price()) {
            (Some(_), Some(qty), Some(price)) if price >= 0.0 => qty as f64 * price,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormSetError {
    #[error("Phải có ít nhất một đơn hàng")]
    LastForm,
    #[error("Không tìm thấy đơn hàng #{0}")]
    UnknownIndex(usize),
    #[error("Tối đa {0} đơn hàng")]
    AtCapacity(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSet {
    forms: Vec<OrderFormDraft>,
    max_forms: usize,
    next_instance: u64,
}

impl FormSet {
    /// Набор из одной пустой формы
    pub fn new(max_forms: usize) -> Self {
        let mut set = Self {
            forms: Vec::new(),
            max_forms: max_forms.max(1),
            next_instance: 0,
        };
        set.regenerate(1);
        set
    }

    fn fresh_instance(&mut self) -> WidgetInstance {
        self.next_instance += 1;
        WidgetInstance(self.next_instance)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn max_forms(&self) -> usize {
        self.max_forms
    }

    pub fn forms(&self) -> &[OrderFormDraft] {
        &self.forms
    }

    pub fn get(&self, index: usize) -> Option<&OrderFormDraft> {
        self.forms.iter().find(|f| f.index == index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut OrderFormDraft> {
        self.forms.iter_mut().find(|f| f.index == index)
    }

    /// Текущий индекс формы с данным виджетом
    pub fn index_of(&self, instance: WidgetInstance) -> Option<usize> {
        self.forms
            .iter()
            .find(|f| f.instance == instance)
            .map(|f| f.index)
    }

    pub fn indices(&self) -> Vec<usize> {
        self.forms.iter().map(|f| f.index).collect()
    }

    /// Отбросить все формы и создать `count` пустых (1..=max)
    pub fn regenerate(&mut self, count: usize) {
        let count = count.clamp(1, self.max_forms);
        self.forms.clear();
        for index in 1..=count {
            let instance = self.fresh_instance();
            self.forms.push(OrderFormDraft::empty(index, instance));
        }
    }

    /// Добавить пустую форму в конец, вернуть её индекс
    pub fn add_form(&mut self) -> Result<usize, FormSetError> {
        if self.forms.len() >= self.max_forms {
            return Err(FormSetError::AtCapacity(self.max_forms));
        }
        let index = self.forms.len() + 1;
        let instance = self.fresh_instance();
        self.forms.push(OrderFormDraft::empty(index, instance));
        Ok(index)
    }

    pub fn check_delete(&self, index: usize) -> Result<(), FormSetError> {
        if self.get(index).is_none() {
            return Err(FormSetError::UnknownIndex(index));
        }
        if self.forms.len() <= 1 {
            return Err(FormSetError::LastForm);
        }
        Ok(())
    }

    /// Удалить форму и перенумеровать оставшиеся.
    ///
    /// Формы, чей индекс изменился, получают новый виджет выбора товара
    /// и теряют выбранный товар; остальные поля сохраняются.
    pub fn remove(&mut self, index: usize) -> Result<OrderFormDraft, FormSetError> {
        self.check_delete(index)?;
        let position = self
            .forms
            .iter()
            .position(|f| f.index == index)
            .ok_or(FormSetError::UnknownIndex(index))?;
        let removed = self.forms.remove(position);
        self.renumber();
        Ok(removed)
    }

    /// Убрать формы уже записанных заказов (частичный успех отправки).
    /// Без подтверждения и без проверки последней формы; пустой набор
    /// получает одну новую форму. Возвращает число удалённых.
    pub fn remove_instances(&mut self, instances: &[WidgetInstance]) -> usize {
        let before = self.forms.len();
        self.forms.retain(|f| !instances.contains(&f.instance));
        let removed = before - self.forms.len();
        if self.forms.is_empty() {
            self.regenerate(1);
        } else if removed > 0 {
            self.renumber();
        }
        removed
    }

    fn renumber(&mut self) {
        for k in 0..self.forms.len() {
            let new_index = k + 1;
            if self.forms[k].index != new_index {
                let instance = self.fresh_instance();
                let form = &mut self.forms[k];
                form.index = new_index;
                form.instance = instance;
                // цена, подставленная выбранным товаром, уходит вместе с ним
                if let Some(product) = form.product.take() {
                    if form.field(FormField::UnitPrice) == product.price.to_string() {
                        form.fields.remove(&FormField::UnitPrice);
                    }
                }
            }
        }
    }

    pub fn set_field(&mut self, index: usize, field: FormField, value: String) -> bool {
        match self.get_mut(index) {
            Some(form) => {
                form.fields.insert(field, value);
                true
            }
            None => false,
        }
    }

    /// Выбор товара подставляет его цену в поле цены
    pub fn set_product(&mut self, index: usize, product: Option<ProductOption>) -> bool {
        let Some(form) = self.get_mut(index) else {
            return false;
        };
        match &product {
            Some(p) => {
                form.fields.insert(FormField::UnitPrice, p.price.to_string());
            }
            None => {
                form.fields.remove(&FormField::UnitPrice);
            }
        }
        form.product = product;
        true
    }

    /// Заменить набор импортированными строками; лишние сверх лимита отбрасываются.
    /// Возвращает число созданных форм.
    pub fn apply_imported(&mut self, seeds: Vec<DraftSeed>) -> usize {
        if seeds.is_empty() {
            self.regenerate(1);
            return 0;
        }
        self.forms.clear();
        for (k, seed) in seeds.into_iter().take(self.max_forms).enumerate() {
            let instance = self.fresh_instance();
            let mut form = OrderFormDraft::empty(k + 1, instance);
            form.fields.extend(seed.fields);
            form.product = seed.product;
            self.forms.push(form);
        }
        self.forms.len()
    }

    pub fn total_amount(&self) -> f64 {
        self.forms.iter().map(OrderFormDraft::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> ProductOption {
        ProductOption {
            id: id.into(),
            name: format!("SP {}", id),
            price,
        }
    }

    fn set_of(n: usize) -> FormSet {
        let mut set = FormSet::new(50);
        set.regenerate(n);
        for index in 1..=n {
            set.set_field(index, FormField::CustomerName, format!("Khách {}", index));
            set.set_product(index, Some(product(&format!("p{}", index), 1000.0)));
        }
        set
    }

    #[test]
    fn test_new_set_has_one_form() {
        let set = FormSet::new(10);
        assert_eq!(set.indices(), vec![1]);
        assert_eq!(set.forms()[0].field(FormField::Quantity), "1");
    }

    #[test]
    fn test_field_ids_derive_from_index() {
        assert_eq!(field_id(FormField::CustomerName, 3), "customerName_3");
        assert_eq!(form_id(2), "orderForm_2");
        let set = set_of(2);
        let second = set.get(2).unwrap();
        assert_eq!(second.field_id(FormField::UnitPrice), "unitPrice_2");
        assert_eq!(second.label(), "Đơn hàng #2");
    }

    #[test]
    fn test_deleting_last_form_is_rejected() {
        let mut set = FormSet::new(10);
        let before = set.clone();
        assert_eq!(set.check_delete(1), Err(FormSetError::LastForm));
        assert_eq!(set.remove(1), Err(FormSetError::LastForm));
        assert_eq!(set, before);
    }

    #[test]
    fn test_unknown_index_is_rejected() {
        let mut set = set_of(2);
        assert_eq!(set.remove(5), Err(FormSetError::UnknownIndex(5)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_indices_stay_dense_after_any_deletes() {
        let mut set = FormSet::new(20);
        for _ in 0..5 {
            set.add_form().unwrap();
        }
        // 6 forms
        for index in [3, 1, 4, 2, 1] {
            set.remove(index).unwrap();
            let expected: Vec<usize> = (1..=set.len()).collect();
            assert_eq!(set.indices(), expected);
        }
        assert_eq!(set.len(), 1);
        set.add_form().unwrap();
        assert_eq!(set.indices(), vec![1, 2]);
    }

    #[test]
    fn test_renumbering_resets_selection_only_after_removed() {
        let mut set = set_of(4);
        let before = set.clone();

        let third = before.get(3).unwrap().instance;
        let removed = set.remove(2).unwrap();
        assert_eq!(set.index_of(third), None);
        assert_eq!(set.index_of(before.get(1).unwrap().instance), Some(1));
        assert_eq!(removed.field(FormField::CustomerName), "Khách 2");

        // form 1 is untouched
        assert_eq!(set.forms()[0], before.forms()[0]);

        // former 3 and 4 are now 2 and 3, with fresh widgets and no product
        for (now, was) in [(2usize, 3usize), (3, 4)] {
            let form = set.get(now).unwrap();
            let old = before.get(was).unwrap();
            assert_eq!(form.product, None);
            assert_ne!(form.instance, old.instance);
            assert_eq!(form.field(FormField::CustomerName), old.field(FormField::CustomerName));
        }
    }

    #[test]
    fn test_renumbering_drops_price_filled_by_product() {
        let mut set = set_of(3);
        set.set_field(3, FormField::UnitPrice, "750".into());
        set.remove(1).unwrap();

        // former 2 had the product's price, former 3 a typed one
        let auto = set.get(1).unwrap();
        assert_eq!(auto.product, None);
        assert_eq!(auto.field(FormField::UnitPrice), "");
        assert_eq!(auto.unit_price(), None);
        assert_eq!(auto.line_total(), 0.0);

        let typed = set.get(2).unwrap();
        assert_eq!(typed.product, None);
        assert_eq!(typed.field(FormField::UnitPrice), "750");
    }

    #[test]
    fn test_remove_instances_keeps_the_rest_dense() {
        let mut set = set_of(3);
        let first = set.get(1).unwrap().instance;
        let third = set.get(3).unwrap().instance;
        let kept = set.get(2).unwrap().field(FormField::CustomerName).to_string();

        assert_eq!(set.remove_instances(&[first, third]), 2);
        assert_eq!(set.indices(), vec![1]);
        assert_eq!(set.get(1).unwrap().field(FormField::CustomerName), kept);

        let last = set.get(1).unwrap().instance;
        assert_eq!(set.remove_instances(&[last]), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(1).unwrap().field(FormField::CustomerName), "");
    }

    #[test]
    fn test_removing_the_tail_keeps_others_intact() {
        let mut set = set_of(3);
        let before = set.clone();
        set.remove(3).unwrap();
        assert_eq!(set.forms(), &before.forms()[..2]);
    }

    #[test]
    fn test_capacity_and_regenerate_clamp() {
        let mut set = FormSet::new(2);
        assert_eq!(set.add_form(), Ok(2));
        assert_eq!(set.add_form(), Err(FormSetError::AtCapacity(2)));

        set.regenerate(0);
        assert_eq!(set.len(), 1);
        set.regenerate(10);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_regenerate_replaces_widgets() {
        let mut set = set_of(2);
        let old: Vec<WidgetInstance> = set.forms().iter().map(|f| f.instance).collect();
        set.regenerate(2);
        assert!(set.forms().iter().all(|f| !old.contains(&f.instance) && f.product.is_none()));
    }

    #[test]
    fn test_line_totals() {
        let mut set = FormSet::new(5);
        assert_eq!(set.total_amount(), 0.0);

        set.set_product(1, Some(product("p1", 50_000.0)));
        set.set_field(1, FormField::Quantity, "3".into());
        assert_eq!(set.get(1).unwrap().line_total(), 150_000.0);

        set.add_form().unwrap();
        set.set_product(2, Some(product("p2", 30_000.0)));
        set.set_field(2, FormField::UnitPrice, "25000".into());
        assert_eq!(set.total_amount(), 175_000.0);

        set.set_field(2, FormField::Quantity, "abc".into());
        assert_eq!(set.total_amount(), 150_000.0);
    }

    #[test]
    fn test_unit_price_defaults_to_product_price() {
        let mut set = FormSet::new(5);
        set.set_product(1, Some(product("p1", 12_000.0)));
        set.set_field(1, FormField::UnitPrice, String::new());
        assert_eq!(set.get(1).unwrap().unit_price(), Some(12_000.0));
    }

    #[test]
    fn test_apply_imported_replaces_set() {
        let mut set = FormSet::new(2);
        let seed = |name: &str| {
            let mut fields = BTreeMap::new();
            fields.insert(FormField::CustomerName, name.to_string());
            DraftSeed {
                fields,
                product: Some(product("p1", 1.0)),
            }
        };

        let applied = set.apply_imported(vec![seed("A"), seed("B"), seed("C")]);
        assert_eq!(applied, 2);
        assert_eq!(set.indices(), vec![1, 2]);
        assert_eq!(set.get(2).unwrap().field(FormField::CustomerName), "B");
        assert_eq!(set.get(2).unwrap().field(FormField::Quantity), "1");

        assert_eq!(set.apply_imported(Vec::new()), 0);
        assert_eq!(set.len(), 1);
    }
}
