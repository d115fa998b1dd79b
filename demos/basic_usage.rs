// ============================================================================
// Basic Usage Example
// ============================================================================

use funcqa_math::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== FuncQA Math Example ===\n");

    let calculator = Calculator::default();

    // Questions as a harness would pose them: tool name plus arguments
    let questions: [(&str, &[&str]); 8] = [
        ("add_", &["1", "2", "3"]),
        ("divide_", &["7", "2"]),
        ("power_", &["2", "3", "2"]),
        ("sqrt_", &["2"]),
        ("log_", &["8", "2"]),
        ("choose_", &["5", "2"]),
        ("divide_", &["1", "0"]),
        ("log_", &["1", "2", "3"]),
    ];

    println!("Answers:");
    for (name, raw_args) in questions {
        let args: Result<Vec<Number>, _> = raw_args.iter().map(|s| s.parse()).collect();
        let answer = args.and_then(|args| calculator.evaluate_named(name, &args));

        match answer {
            Ok(answer) => println!("  {}({}) = {}", name, raw_args.join(", "), answer),
            Err(error) => println!("  {}({}) failed: {}", name, raw_args.join(", "), error),
        }
    }

    println!("\n=== Formatting ===");
    for value in [3.14159, 5.0, 0.00000233, -0.00000233, 1.5e20] {
        match normalize(value) {
            Ok(text) => println!("  {:e} -> {}", value, text),
            Err(error) => println!("  {:e} failed: {}", value, error),
        }
    }

    let sign_aware = CalculatorBuilder::new()
        .sign_aware()
        .build()
        .expect("valid configuration");
    let args = [Number::from(-0.00000233), Number::from(1)];
    match sign_aware.evaluate(Operation::Multiply, &args) {
        Ok(text) => println!("  sign-aware -2.33e-6 -> {}", text),
        Err(error) => println!("  sign-aware failed: {}", error),
    }

    println!("\n=== Scientific Notation ===");
    for input in ["1.23e-4", "5.67e+2", "-1.5e-3"] {
        match scientific_to_decimal(input) {
            Ok(text) => println!("  {} -> {}", input, text),
            Err(error) => println!("  {} failed: {}", input, error),
        }
    }
}
