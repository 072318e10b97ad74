/// Flat FICA withholding on gross pay.
pub fn fica_tax(gross_pay: f64, rate: f64) -> f64 {
    gross_pay * rate
}

pub fn net_pay(gross_pay: f64, fica_tax: f64) -> f64 {
    gross_pay - fica_tax
}
