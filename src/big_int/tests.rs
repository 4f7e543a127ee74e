use super::*;
use std::io::Cursor;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

mod create {
    use super::*;

    #[test]
    fn from_text_packs_limbs() {
        assert_eq!(
            big("123456789012345678901234567890"),
            BigInt {
                signum: SigNum::Positive,
                limbs: LimbBuf::from([7890, 3456, 9012, 5678, 1234, 7890, 3456, 12]),
            }
        );
    }

    #[test]
    fn leading_zeros_are_stripped() {
        assert_eq!(big("043873897487123123873456"), big("43873897487123123873456"));
        assert_eq!(big("00000"), BigInt::default());
    }

    #[test]
    fn negative_zero_is_canonical() {
        let zero = big("-0");
        assert_eq!(zero.signum(), SigNum::Zero);
        assert_eq!(zero, big("0"));
        assert_eq!(zero, BigInt::default());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(big("  +42\t"), BigInt::from(42));
        assert_eq!(big(" -7 "), BigInt::from(-7));
    }

    #[test]
    fn from_i32() {
        assert_eq!(BigInt::from(0), BigInt::default());
        assert_eq!(
            BigInt::from(17),
            BigInt {
                signum: SigNum::Positive,
                limbs: LimbBuf::from([17]),
            }
        );
        assert_eq!(BigInt::from(-2_147_483_648), big("-2147483648"));
        assert_eq!(BigInt::from(i32::MAX), big("2147483647"));
    }

    #[test]
    fn from_u32_is_value_preserving() {
        assert_eq!(BigInt::from(u32::MAX), big("4294967295"));
        assert!(!BigInt::from(u32::MAX).is_negative());
        assert_eq!(BigInt::from(0u32), BigInt::default());
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "12a3".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit {
                digit: 'a',
                position: 2
            })
        );
        // position counts from the start of the input, sign included
        assert_eq!(
            " +12a3".parse::<BigInt>(),
            Err(ParseBigIntError::InvalidDigit {
                digit: 'a',
                position: 4
            })
        );
        assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("  ".parse::<BigInt>(), Err(ParseBigIntError::Empty));
        assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    }
}

mod output {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(BigInt::default().to_string(), "0");
        assert_eq!(big("-0").to_string(), "0");
    }

    #[test]
    fn interior_limbs_keep_their_padding() {
        assert_eq!(big("100000001").to_string(), "100000001");
        assert_eq!(big("10000").to_string(), "10000");
        assert_eq!(big("-20001000500023").to_string(), "-20001000500023");
    }

    #[test]
    fn round_trips() {
        for s in [
            "3901381239408349345771209432747289178329484533713",
            "-15",
            "0",
            "123456789012345678901234567890",
        ] {
            assert_eq!(big(s).to_string(), s, "{s} failed to round trip");
        }
        assert_eq!(big("+4093458238234294").to_string(), "4093458238234294");
    }
}

mod compare {
    use super::*;

    #[test]
    fn total_order() {
        let sorted = [
            big("-458976452934282431092350394123"),
            big("-10000"),
            big("-9999"),
            BigInt::default(),
            big("9999"),
            big("10000"),
            big("458976452934282431092350394123"),
        ];
        for (i, lhs) in sorted.iter().enumerate() {
            for (j, rhs) in sorted.iter().enumerate() {
                assert_eq!(lhs.cmp(rhs), i.cmp(&j), "{lhs} <> {rhs}");
            }
        }
    }

    #[test]
    fn negative_magnitudes_order_reversed() {
        assert!(big("-124") < big("-123"));
        assert!(big("-100000000") < big("-99999999"));
    }

    #[test]
    fn consistent_with_sub() {
        let pairs = [
            (big("123"), big("124")),
            (big("-124"), big("-123")),
            (big("-1"), big("99999999999999999999")),
            (BigInt::default(), big("1")),
        ];
        for (a, b) in pairs {
            assert!(a < b);
            assert!(BigInt::default() < &b - &a, "0 < {b} - {a}");
        }
    }

    #[test]
    fn against_native() {
        let n = BigInt::from(17);
        assert_eq!(n, 17);
        assert!(n < 18);
        assert!(n > -17);
        assert!(big("99999999999999999999") > 0);
    }
}

mod math {
    use super::*;

    #[test]
    fn carry_over_every_limb() {
        assert_eq!(
            big("999999999999999999999999999999999999999999999999") + big("1"),
            big("1000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn mixed_sign_add() {
        assert_eq!(
            big("-458976452934282431092350394123") + big("32434983794539845837329453749"),
            big("-426541469139742585255020940374")
        );
    }

    #[test]
    fn neg() {
        assert_eq!(-big("34573947923842911239897459"), big("-34573947923842911239897459"));
        assert_eq!(-big("-1"), big("1"));
        assert_eq!(-BigInt::default(), BigInt::default());
    }

    #[test]
    fn additive_inverse() {
        for s in ["1", "-9999", "946120931239582323409234985283472319871231095034"] {
            let a = big(s);
            assert_eq!(&a + (-a.clone()), BigInt::default(), "{s} + -{s}");
            assert_eq!(&a - &a, BigInt::default(), "{s} - {s}");
        }
    }

    #[test]
    fn sub_equal_operands() {
        assert_eq!(big("-9999") - big("-9999"), BigInt::default());
        assert_eq!(
            big("-34573947923842911239897459") - big("-34573947923842911239897459"),
            BigInt::default()
        );
        assert_eq!(big("10000") - big("10000"), BigInt::default());
    }

    #[test]
    fn thin_by_wide_product() {
        assert_eq!(
            big("9999999999999999999999999999") * BigInt::from(9999),
            big("99989999999999999999999999990001")
        );
    }

    #[test]
    fn commutes() {
        let a = big("946120931239582323409234985283472319871231095034");
        let b = big("-43873897487123123873456");
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a + &b) + &a, &a + (&b + &a));
    }

    #[test]
    fn mul_identities() {
        let a = big("3901381239408349345771209432747289178329484533713");
        assert_eq!(&a * BigInt::from(1), a);
        assert_eq!(&a * BigInt::default(), BigInt::default());
        assert_eq!(&a * BigInt::from(-1), -a.clone());
    }

    #[test]
    fn big_product() {
        assert_eq!(
            big("946120931239582323409234985283472319871231095034") * big("043873897487123123873456"),
            big("41510012747626900767766071304626751312262276372208574991117898526017504")
        );
    }

    #[test]
    fn sign_of_products() {
        assert_eq!(big("-12") * big("-12"), big("144"));
        assert_eq!(big("-12") * big("12"), big("-144"));
        assert_eq!(big("12") * big("-12"), big("-144"));
    }

    #[test]
    fn native_operands() {
        let n = BigInt::from(17);
        assert_eq!(&n + 100, 117);
        assert_eq!(&n - 100, -83);
        assert_eq!(&n * 100, 1700);
    }

    #[test]
    fn assign_ops() {
        let mut a = big("123456789012345678901234567890");
        a *= BigInt::from(1);
        a += 2;
        a += big("123456789012345678901234567890");
        assert_eq!(a.to_string(), "246913578024691357802469135782");

        a -= a.clone();
        assert!(a.is_zero());
    }

    #[test]
    fn clear_resets_to_zero() {
        let mut a = big("-458976452934282431092350394123");
        a.clear();
        assert!(a.is_zero());
        assert_eq!(a, 0);
        assert_eq!(a.to_string(), "0");
    }
}

mod read {
    use super::*;

    #[test]
    fn sequence_with_whitespace() {
        let mut input = Cursor::new("  3901381239408349345771209432747289178329484533713 -15\n+42");
        assert_eq!(
            BigInt::read_from(&mut input).unwrap(),
            Some(big("3901381239408349345771209432747289178329484533713"))
        );
        assert_eq!(BigInt::read_from(&mut input).unwrap(), Some(big("-15")));
        assert_eq!(BigInt::read_from(&mut input).unwrap(), Some(BigInt::from(42)));
        assert_eq!(BigInt::read_from(&mut input).unwrap(), None);
    }

    #[test]
    fn end_of_input_is_benign() {
        assert_eq!(BigInt::read_from(&mut Cursor::new("")).unwrap(), None);
        assert_eq!(BigInt::read_from(&mut Cursor::new("   \n\t ")).unwrap(), None);
    }

    #[test]
    fn zero_reads_as_canonical() {
        let mut input = Cursor::new("0 -0");
        assert_eq!(BigInt::read_from(&mut input).unwrap(), Some(BigInt::default()));
        assert_eq!(BigInt::read_from(&mut input).unwrap(), Some(BigInt::default()));
    }

    #[test]
    fn stops_at_the_first_non_digit() {
        let mut input = Cursor::new("123abc");
        assert_eq!(BigInt::read_from(&mut input).unwrap(), Some(BigInt::from(123)));
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn missing_digits_rewind() {
        let mut input = Cursor::new("  -abc");
        assert!(matches!(
            BigInt::read_from(&mut input),
            Err(ReadError::NoDigits)
        ));
        // rewound to where the whitespace ended, the sign is unconsumed
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn lone_sign_at_end_rewinds() {
        let mut input = Cursor::new("17 +");
        assert_eq!(BigInt::read_from(&mut input).unwrap(), Some(BigInt::from(17)));
        assert!(matches!(
            BigInt::read_from(&mut input),
            Err(ReadError::NoDigits)
        ));
        assert_eq!(input.position(), 3);
    }
}
