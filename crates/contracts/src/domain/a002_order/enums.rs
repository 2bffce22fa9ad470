use serde::{Deserialize, Serialize};

/// Тип заказа. На проводе: `tmdt` / `retail` / `wholesale`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderType {
    /// Thương mại điện tử (маркетплейсы)
    #[default]
    #[serde(rename = "tmdt", alias = "ecommerce")]
    Ecommerce,
    #[serde(rename = "retail")]
    Retail,
    #[serde(rename = "wholesale")]
    Wholesale,
}

impl OrderType {
    pub const ALL: [OrderType; 3] = [OrderType::Ecommerce, OrderType::Retail, OrderType::Wholesale];

    pub fn code(&self) -> &'static str {
        match self {
            OrderType::Ecommerce => "tmdt",
            OrderType::Retail => "retail",
            OrderType::Wholesale => "wholesale",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "tmdt" | "ecommerce" => Some(OrderType::Ecommerce),
            "retail" => Some(OrderType::Retail),
            "wholesale" => Some(OrderType::Wholesale),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        order_type_label(self.code())
    }

    /// Заголовок кнопки выбора типа на странице создания заказа
    pub fn button_title(&self) -> &'static str {
        match self {
            OrderType::Ecommerce => "Đơn TMĐT",
            OrderType::Retail => "Đơn bán lẻ",
            OrderType::Wholesale => "Đơn bán sỉ",
        }
    }
}

/// Отображаемая метка типа заказа по сырому коду из базы
pub fn order_type_label(raw: &str) -> &'static str {
    match raw {
        "tmdt" => "TMĐT",
        "wholesale" => "Sỉ",
        "retail" => "Lẻ",
        _ => "Khác",
    }
}

/// Способ создания заказа (имеет смысл только для TMĐT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreationMethod {
    #[default]
    Manual,
    Pdf,
    Excel,
}

impl CreationMethod {
    pub const ALL: [CreationMethod; 3] = [
        CreationMethod::Manual,
        CreationMethod::Pdf,
        CreationMethod::Excel,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CreationMethod::Manual => "Nhập thủ công",
            CreationMethod::Pdf => "Tải lên PDF",
            CreationMethod::Excel => "Nhập từ Excel",
        }
    }
}

/// Статус оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Partial,
    Paid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Unpaid,
        PaymentStatus::Partial,
        PaymentStatus::Paid,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Paid => "paid",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Chưa thanh toán",
            PaymentStatus::Partial => "Thanh toán một phần",
            PaymentStatus::Paid => "Đã thanh toán",
        }
    }
}
