use currency_converter::{
    convert, format_fixed, parse_amount, rate_for_code, AmountInput, ConversionView, Currency,
    DecimalPlaces, RateTable, INVALID_NUMBER_MESSAGE,
};

#[test]
fn test_documented_rates() {
    for (code, rate) in [("USD", 0.66), ("EUR", 0.61), ("CNY", 4.75)] {
        assert_eq!(rate_for_code(code), rate, "rate for {}", code);
    }
    for currency in Currency::ALL {
        assert_eq!(
            RateTable::STANDARD.rate(currency),
            rate_for_code(currency.code())
        );
    }
}

#[test]
fn test_unknown_code_falls_back_to_identity() {
    for code in ["AUD", "GBP", "JPY", "", "US D"] {
        assert_eq!(rate_for_code(code), 1.0, "rate for {:?}", code);
    }
}

#[test]
fn test_blank_inputs_have_no_error_and_no_result() {
    for input in ["", " ", "    ", "\t", " \n "] {
        for currency in Currency::ALL {
            let view = ConversionView::compute(input, currency, DecimalPlaces::Two);
            assert_eq!(view.error, None, "input {:?}", input);
            assert_eq!(view.result_line(), None, "input {:?}", input);
        }
    }
}

#[test]
fn test_unparseable_inputs_show_error_and_no_result() {
    for input in ["abc", "1.2.3", "12a", "--5", "$10", "1 000"] {
        let view = ConversionView::compute(input, Currency::Usd, DecimalPlaces::Two);
        assert_eq!(view.error, Some(INVALID_NUMBER_MESSAGE), "input {:?}", input);
        assert_eq!(view.result_line(), None, "input {:?}", input);
    }
}

#[test]
fn test_result_is_amount_times_rate_at_chosen_precision() {
    for text in ["0", "1", "12.34", "250", "-8", "0.001"] {
        let value = match parse_amount(text) {
            AmountInput::Value(value) => value,
            other => panic!("expected a value for {:?}, got {:?}", text, other),
        };
        for currency in Currency::ALL {
            for places in DecimalPlaces::ALL {
                let view = ConversionView::compute(text, currency, places);
                let expected = format_fixed(convert(value, currency), places);
                assert_eq!(view.result.as_deref(), Some(expected.as_str()));

                let fraction_len = expected.split('.').nth(1).map(str::len).unwrap_or(0);
                assert_eq!(fraction_len, places.as_u8() as usize);
            }
        }
    }
}

#[test]
fn test_rate_line_always_shown() {
    for input in ["", "abc", "10"] {
        let view = ConversionView::compute(input, Currency::Cny, DecimalPlaces::Zero);
        assert_eq!(view.rate_line, "Rate: 1 AUD = 4.7500 CNY");
    }
}

#[test]
fn test_usd_two_places() {
    let view = ConversionView::compute("100", Currency::Usd, DecimalPlaces::Two);
    assert_eq!(view.rate_line, "Rate: 1 AUD = 0.6600 USD");
    assert_eq!(view.result_line().as_deref(), Some("Result: USD 66.00"));
}

#[test]
fn test_cny_zero_places() {
    let view = ConversionView::compute("100", Currency::Cny, DecimalPlaces::Zero);
    assert_eq!(view.result_line().as_deref(), Some("Result: CNY 475"));
}

#[test]
fn test_invalid_input_message() {
    let view = ConversionView::compute("abc", Currency::Usd, DecimalPlaces::Two);
    assert_eq!(view.error, Some("Please enter a valid number."));
    assert_eq!(view.result_line(), None);
}

#[test]
fn test_empty_input_is_silent() {
    let view = ConversionView::compute("", Currency::Usd, DecimalPlaces::Two);
    assert_eq!(view.error, None);
    assert_eq!(view.result_line(), None);
}

#[test]
fn test_eur_three_places() {
    let view = ConversionView::compute("50", Currency::Eur, DecimalPlaces::Three);
    assert_eq!(view.result_line().as_deref(), Some("Result: EUR 30.500"));
}

#[test]
fn test_large_amounts_format_at_every_precision() {
    for exp in 20..=29 {
        let input = format!("1e{}", exp);
        for currency in Currency::ALL {
            for places in DecimalPlaces::ALL {
                let view = ConversionView::compute(&input, currency, places);
                let result = view
                    .result
                    .unwrap_or_else(|| panic!("no result for {} {} {}", input, currency, places));
                let fraction_len = result.split('.').nth(1).map(str::len).unwrap_or(0);
                assert_eq!(fraction_len, places.as_u8() as usize, "result {}", result);
            }
        }
    }
}

#[test]
fn test_large_amounts_keep_integer_digits() {
    let cases = [
        ("1e27", Currency::Cny, DecimalPlaces::Four, 28),
        ("1e28", Currency::Usd, DecimalPlaces::Four, 28),
        ("1e29", Currency::Eur, DecimalPlaces::Three, 29),
    ];
    for (input, currency, places, integer_digits) in cases {
        let view = ConversionView::compute(input, currency, places);
        let result = view.result.expect("large amount should convert");
        let (integer, fraction) = result.split_once('.').expect("fractional part");
        assert_eq!(integer.len(), integer_digits, "result {}", result);
        assert_eq!(fraction.len(), places.as_u8() as usize, "result {}", result);
    }
}

#[test]
fn test_small_negative_result_keeps_sign() {
    let view = ConversionView::compute("-0.001", Currency::Usd, DecimalPlaces::Two);
    assert_eq!(view.result_line().as_deref(), Some("Result: USD -0.00"));
}
