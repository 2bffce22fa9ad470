const TRACKING_MARKER: &str = "Mã vận đơn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLine {
    pub sku: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingLabel {
    pub tracking_code: String,
    pub recipient: String,
    pub phone: String,
    pub address: String,
    pub platform: Option<String>,
    pub lines: Vec<LabelLine>,
}

/// Делит текст на этикетки по строкам "Mã vận đơn".
/// Текст до первой такой строки игнорируется.
pub fn parse_shipping_labels(text: &str) -> Vec<ShippingLabel> {
    let mut labels: Vec<ShippingLabel> = Vec::new();
    let mut awaiting_code = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(rest) = line.strip_prefix(TRACKING_MARKER) {
            let code = strip_separator(rest);
            awaiting_code = code.is_empty();
            labels.push(ShippingLabel {
                tracking_code: code.to_string(),
                ..Default::default()
            });
            continue;
        }

        let Some(label) = labels.last_mut() else {
            continue;
        };

        if awaiting_code {
            label.tracking_code = line.to_string();
            awaiting_code = false;
        } else if let Some(v) = line.strip_prefix("Người nhận:") {
            label.recipient = v.trim().to_string();
        } else if let Some(v) = line.strip_prefix("SĐT:") {
            label.phone = v.trim().to_string();
        } else if let Some(v) = line.strip_prefix("Địa chỉ:") {
            label.address = v.trim().to_string();
        } else if let Some(v) = line.strip_prefix("Sàn:") {
            let v = v.trim();
            if !v.is_empty() {
                label.platform = Some(v.to_string());
            }
        } else if let Some(item) = parse_product_line(line) {
            label.lines.push(item);
        }
    }

    labels
}

fn strip_separator(rest: &str) -> &str {
    rest.trim().trim_start_matches(':').trim()
}

/// "{SKU} x {qty}"
fn parse_product_line(line: &str) -> Option<LabelLine> {
    let (sku, qty) = line
        .rsplit_once(" x ")
        .or_else(|| line.rsplit_once(" X "))?;
    let sku = sku.trim();
    if sku.is_empty() || sku.contains(char::is_whitespace) {
        return None;
    }
    let quantity = qty.trim().parse::<u32>().ok().filter(|q| *q > 0)?;
    Some(LabelLine {
        sku: sku.to_string(),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Phiếu gửi hàng
Mã vận đơn: SPX123
Người nhận: Nguyễn Văn A
SĐT: 0901234567
Địa chỉ: 12 Lê Lợi, Q1
Sàn: Shopee
SP01 x 2
SP02 X 1

Mã vận đơn
GHN777
Người nhận: Trần B
SP03 x 3
";

    #[test]
    fn splits_labels_at_tracking_marker() {
        let labels = parse_shipping_labels(SAMPLE);
        assert_eq!(labels.len(), 2);

        let first = &labels[0];
        assert_eq!(first.tracking_code, "SPX123");
        assert_eq!(first.recipient, "Nguyễn Văn A");
        assert_eq!(first.phone, "0901234567");
        assert_eq!(first.address, "12 Lê Lợi, Q1");
        assert_eq!(first.platform.as_deref(), Some("Shopee"));
        assert_eq!(
            first.lines,
            vec![
                LabelLine { sku: "SP01".into(), quantity: 2 },
                LabelLine { sku: "SP02".into(), quantity: 1 },
            ]
        );

        let second = &labels[1];
        assert_eq!(second.tracking_code, "GHN777");
        assert_eq!(second.platform, None);
        assert_eq!(second.lines.len(), 1);
    }

    #[test]
    fn ignores_noise_and_invalid_lines() {
        assert!(parse_shipping_labels("no labels here\nSP01 x 2").is_empty());
        assert_eq!(parse_product_line("Tổng cộng x 3"), None);
        assert_eq!(parse_product_line("SP01 x 0"), None);
        assert_eq!(parse_product_line("SP01 x abc"), None);
    }
}
