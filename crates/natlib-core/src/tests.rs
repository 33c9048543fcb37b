#[cfg(test)]
mod tests {
    use crate::*;
    use rand::Rng;

    #[test]
    fn test_add() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(add(-5, 10), 5);
    }

    #[test]
    fn test_add_wraps_at_i32_width() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_add_is_commutative() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let a: i32 = rng.gen();
            let b: i32 = rng.gen();
            assert_eq!(add(a, b), add(b, a), "add({}, {})", a, b);
        }
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(2.5, 4.0), 10.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert!(multiply(f64::NAN, 1.0).is_nan());
        assert_eq!(multiply(f64::INFINITY, 2.0), f64::INFINITY);
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(FACTORIAL_MAX_INPUT), Ok(479_001_600));
    }

    #[test]
    fn test_factorial_rejects_out_of_range() {
        assert_eq!(factorial(-1), Err(MathError::Negative(-1)));
        assert_eq!(
            factorial(13),
            Err(MathError::Overflow { op: "factorial", n: 13 })
        );
        assert!(factorial(i32::MAX).is_err());
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(17));
        assert!(!is_prime(16));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(is_prime(7919));
    }

    #[test]
    fn test_is_prime_below_two() {
        for n in [1, 0, -1, -7, i32::MIN] {
            assert!(!is_prime(n), "is_prime({})", n);
        }
    }

    #[test]
    fn test_is_prime_large_values() {
        // 2^31 - 1 is a Mersenne prime
        assert!(is_prime(i32::MAX));
        // 46337^2 < i32::MAX
        assert!(!is_prime(46_337 * 46_337));
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0), Ok(0));
        assert_eq!(fibonacci(1), Ok(1));
        assert_eq!(fibonacci(2), Ok(1));
        assert_eq!(fibonacci(10), Ok(55));
        assert_eq!(fibonacci(FIBONACCI_MAX_INPUT), Ok(1_836_311_903));
    }

    #[test]
    fn test_fibonacci_rejects_out_of_range() {
        assert_eq!(fibonacci(-3), Err(MathError::Negative(-3)));
        assert_eq!(
            fibonacci(47),
            Err(MathError::Overflow { op: "fibonacci", n: 47 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(MathError::Negative(-2).to_string(), "negative input: -2");
        assert_eq!(
            MathError::Overflow { op: "factorial", n: 20 }.to_string(),
            "factorial(20) does not fit in a 32-bit integer"
        );
    }

    #[test]
    fn test_string_length_counts_bytes() {
        assert_eq!(string_length(""), 0);
        assert_eq!(string_length("hello"), 5);
        assert_eq!(string_length("Hello, World!"), 13);
        // 'é' is two UTF-8 code units, the crab is four
        assert_eq!(string_length("é"), 2);
        assert_eq!(string_length("🦀"), 4);
    }

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string("Hello, World!"), "!dlroW ,olleH");
        assert_eq!(reverse_string("añb🦀"), "🦀bña");
    }

    #[test]
    fn test_reverse_string_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..32);
            let s: String = (0..len).map(|_| rng.gen::<char>()).collect();
            assert_eq!(reverse_string(&reverse_string(&s)), s);
        }
    }

    #[test]
    fn test_sum_array() {
        assert_eq!(sum_array(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum_array(&[]), 0);
        assert_eq!(sum_array(&[-4, 4]), 0);
        assert_eq!(sum_array(&[i32::MAX, 1]), i32::MIN);
    }

    #[test]
    fn test_sum_array_agrees_with_add() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let values: Vec<i32> = (0..rng.gen_range(0..16)).map(|_| rng.gen()).collect();
            let expected = values.iter().fold(0, |acc, &v| add(acc, v));
            assert_eq!(sum_array(&values), expected);
        }
    }
}
