//! Balance-ceiling alerts: a waiter parked at or below the ceiling returns
//! only once the balance rises strictly above it.

#[cfg(test)]
mod tests {
    use monitor_ledger::MonitorLedger;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn alert_fires_when_ceiling_crossed() {
        crate::init_tracing();
        let ledger = Arc::new(MonitorLedger::with_defaults());
        ledger.open("p1".into(), "P1".into(), 50).unwrap();
        ledger.open("funder".into(), "FUNDER".into(), 10).unwrap();

        let alert = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || ledger.alert_max("p1", 50))
        };

        thread::sleep(Duration::from_millis(50));
        ledger.transfer("funder", "P1", 1).unwrap();

        alert.join().unwrap().unwrap();
        assert_eq!(ledger.balance_of("p1").unwrap(), 51);

        // Already above the ceiling: returns immediately.
        ledger.transfer("funder", "P1", 9).unwrap();
        ledger.alert_max("p1", 50).unwrap();
        assert_eq!(ledger.balance_of("p1").unwrap(), 60);
    }

    #[test]
    fn one_credit_can_release_several_alerts_in_cascade() {
        let ledger = Arc::new(MonitorLedger::with_defaults());
        ledger.open("p1".into(), "P1".into(), 0).unwrap();
        ledger.open("funder".into(), "FUNDER".into(), 10).unwrap();

        // Two alerts on the same account with different ceilings. A single
        // credit above both makes the first wake's reevaluation release the
        // second.
        let low = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || ledger.alert_max("p1", 0))
        };
        let high = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || ledger.alert_max("p1", 5))
        };

        thread::sleep(Duration::from_millis(50));
        ledger.transfer("funder", "P1", 10).unwrap();

        low.join().unwrap().unwrap();
        high.join().unwrap().unwrap();
        assert_eq!(ledger.status().pending_alert_waits, 0);
    }

    #[test]
    fn alert_at_exact_ceiling_does_not_fire() {
        let ledger = Arc::new(MonitorLedger::with_defaults());
        ledger.open("p1".into(), "P1".into(), 9).unwrap();
        ledger.open("funder".into(), "FUNDER".into(), 1).unwrap();

        // Raising the balance to exactly the ceiling must not wake the
        // alert; the timed wait expires instead.
        let alert = {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                ledger.alert_max_with_timeout("p1", 10, Duration::from_millis(200))
            })
        };

        thread::sleep(Duration::from_millis(50));
        ledger.transfer("funder", "P1", 1).unwrap();

        assert!(alert.join().unwrap().is_err());
        assert_eq!(ledger.balance_of("p1").unwrap(), 10);
    }
}
