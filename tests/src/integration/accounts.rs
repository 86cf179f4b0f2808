//! Account opening under contention: distinct identities all succeed,
//! duplicated identities resolve to exactly one winner regardless of order.

#[cfg(test)]
mod tests {
    use monitor_ledger::{LedgerError, MonitorLedger};
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn concurrent_opens_with_distinct_ids_all_succeed() {
        crate::init_tracing();
        let ledger = Arc::new(MonitorLedger::with_defaults());
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    ledger.open(format!("p{i}"), format!("P{i}"), i as u64 * 10)
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        assert_eq!(ledger.status().accounts, 8);
        for i in 0..8u64 {
            assert_eq!(ledger.balance_of(&format!("p{i}")).unwrap(), i * 10);
        }
    }

    #[test]
    fn duplicate_private_id_has_exactly_one_winner() {
        let ledger = Arc::new(MonitorLedger::with_defaults());
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = ["PA", "PB"]
            .into_iter()
            .map(|public_id| {
                let ledger = Arc::clone(&ledger);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    ledger.open("p1".into(), public_id.into(), 5)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(LedgerError::AccountExists { .. })
        )));
        assert_eq!(ledger.status().accounts, 1);
        assert_eq!(ledger.balance_of("p1").unwrap(), 5);
    }

    #[test]
    fn duplicate_public_id_has_exactly_one_winner() {
        let ledger = Arc::new(MonitorLedger::with_defaults());
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = ["pa", "pb"]
            .into_iter()
            .map(|private_id| {
                let ledger = Arc::clone(&ledger);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    ledger.open(private_id.into(), "P1".into(), 5)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert!(results.iter().any(|r| matches!(
            r,
            Err(LedgerError::IdentityTaken { .. })
        )));
        assert_eq!(ledger.status().accounts, 1);
    }
}
