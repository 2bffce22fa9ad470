//! Форматирование чисел и сумм в вьетнамской локали: `1.234.567,5`

/// Форматирует число с разделителем тысяч (точка) и запятой перед дробной частью
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number;
/// assert_eq!(format_number(1234.567, 2), "1.234,57");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем точки каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Сумма в донгах, без дробной части: `50.000 ₫`
pub fn format_vnd(value: f64) -> String {
    format!("{} ₫", format_number(value, 0))
}
