pub mod analyze_transaction;
