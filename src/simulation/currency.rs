/// 금액을 USD 약식 표기로 바꾼다. 표시 전용.
///
/// 1,000,000 이상은 `$X.XM`, 1,000 이상은 `$XK`, 그 외는 `$X`. 값이 정확히 중간일 때만
/// 0에서 먼 쪽으로 올린다(`2500` -> `$3K`). 나머지는 저장된 이진 값 그대로 반올림한다.
pub fn format_currency(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("${}M", to_fixed(amount / 1_000_000.0, 1))
    } else if amount >= 1_000.0 {
        format!("${}K", to_fixed(amount / 1_000.0, 0))
    } else {
        format!("${}", to_fixed(amount, 0))
    }
}

/// 소수 `decimals`자리 고정 표기. 포맷터는 정확한 중간값을 짝수 쪽으로 보내므로
/// 그 경우만 직접 올린다.
fn to_fixed(value: f64, decimals: u8) -> String {
    let precision = usize::from(decimals);
    let scale = 10f64.powi(i32::from(decimals));
    let scaled = value * scale;
    // scaled에 반올림 오차가 없어야 진짜 중간값이다.
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        format!("{:.*}", precision, scaled.round() / scale)
    } else {
        format!("{:.*}", precision, value)
    }
}
