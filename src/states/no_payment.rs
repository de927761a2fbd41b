use crate::core::{State, StateKind};
use crate::machine::MachineHandle;
use crate::notice::Notice;

/// Waiting for a payment.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPayment;

impl State for NoPayment {
    fn kind(&self) -> StateKind {
        StateKind::NoPayment
    }

    fn insert_payment(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::PaymentAccepted);
        machine.set_state(StateKind::HasPayment);
        if machine.count() == 0 {
            // Hand the payment straight back, then settle in the terminal state.
            machine.notify(Notice::NoItemsLeft);
            machine.eject_payment();
            machine.set_state(StateKind::SoldOut);
        }
    }

    fn eject_payment(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::NoPaymentToEject);
    }

    fn turn_crank(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::CrankWithoutPayment);
    }

    fn dispense(&self, machine: &mut MachineHandle<'_>) {
        machine.notify(Notice::PayFirst);
    }
}

#[cfg(test)]
mod tests {
    use crate::core::StateKind;
    use crate::machine::GumballMachine;
    use crate::notice::{Notice, RecordingSink};
    use crate::spinner::ScriptedSpinner;

    fn machine(count: u32) -> (GumballMachine, RecordingSink) {
        let sink = RecordingSink::new();
        let machine = GumballMachine::builder()
            .inventory(count)
            .spinner(ScriptedSpinner::never_wins())
            .sink(sink.clone())
            .build()
            .unwrap();
        (machine, sink)
    }

    #[test]
    fn insert_moves_to_has_payment() {
        let (mut machine, sink) = machine(3);
        machine.insert_payment();
        assert_eq!(machine.state(), StateKind::HasPayment);
        assert_eq!(sink.notices(), vec![Notice::PaymentAccepted]);
    }

    #[test]
    fn insert_with_empty_inventory_returns_payment() {
        let (mut machine, sink) = machine(3);
        machine.set_count_for_test(0);

        machine.insert_payment();

        assert_eq!(machine.state(), StateKind::SoldOut);
        assert_eq!(
            sink.notices(),
            vec![
                Notice::PaymentAccepted,
                Notice::NoItemsLeft,
                Notice::PaymentReturned
            ]
        );
        let path = machine.history().get_path();
        assert_eq!(
            &path[1..],
            &[
                StateKind::HasPayment,
                StateKind::NoPayment,
                StateKind::SoldOut
            ]
        );
    }

    #[test]
    fn other_actions_only_report() {
        let (mut machine, sink) = machine(3);
        machine.eject_payment();
        machine.turn_crank();
        assert_eq!(machine.state(), StateKind::NoPayment);
        assert_eq!(machine.count(), 3);
        assert_eq!(
            sink.notices(),
            vec![
                Notice::NoPaymentToEject,
                Notice::CrankWithoutPayment,
                Notice::PayFirst
            ]
        );
    }
}
