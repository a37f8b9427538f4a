use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderForm, PlacementOutcome};
use crate::domain::ports::OrderRepository;

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Validates the submission and hands the result to the atomic placement
    /// operation. Validation failures never reach the database.
    pub fn place(&self, form: OrderForm) -> Result<PlacementOutcome, DomainError> {
        let order = validate(form)?;
        self.repo.place(order)
    }
}

fn validate(form: OrderForm) -> Result<NewOrder, DomainError> {
    let customer_name = required(form.customer_name, "customer_name")?;
    let customer_email = required(form.customer_email, "customer_email")?;
    let artwork_id = match form.artwork_id {
        None => return Err(DomainError::missing_field("artwork_id")),
        Some(id) if id <= 0 => {
            return Err(DomainError::Validation(
                "artwork_id must be a positive integer".to_string(),
            ))
        }
        Some(id) => id,
    };

    Ok(NewOrder {
        customer_name,
        customer_email,
        customer_phone: form.customer_phone.unwrap_or_default(),
        artwork_id,
        shipping_address: form.shipping_address.unwrap_or_default(),
        notes: form.notes.unwrap_or_default(),
    })
}

fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::missing_field(field)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    struct FakeRepo {
        outcome: PlacementOutcome,
        calls: AtomicUsize,
        last_order: Mutex<Option<NewOrder>>,
    }

    impl FakeRepo {
        fn placing(order_id: i32) -> Arc<Self> {
            Arc::new(Self {
                outcome: PlacementOutcome::Placed { order_id },
                calls: AtomicUsize::new(0),
                last_order: Mutex::new(None),
            })
        }

        fn rejecting(reason: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: PlacementOutcome::Rejected {
                    reason: reason.to_string(),
                },
                calls: AtomicUsize::new(0),
                last_order: Mutex::new(None),
            })
        }
    }

    impl OrderRepository for FakeRepo {
        fn place(&self, order: NewOrder) -> Result<PlacementOutcome, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_order.lock().unwrap() = Some(order);
            Ok(self.outcome.clone())
        }
    }

    fn complete_form() -> OrderForm {
        OrderForm {
            customer_name: Some("Nguyen Van X".to_string()),
            customer_email: Some("customer@example.com".to_string()),
            customer_phone: Some("+84 90 123 4567".to_string()),
            artwork_id: Some(3),
            shipping_address: Some("12 Gallery Lane".to_string()),
            notes: Some("Deliver after 6pm".to_string()),
        }
    }

    #[test]
    fn valid_form_is_placed() {
        let repo = FakeRepo::placing(17);
        let service = OrderService::new(repo.clone());

        let outcome = service.place(complete_form()).expect("placement");
        assert_eq!(outcome, PlacementOutcome::Placed { order_id: 17 });
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejection_is_passed_through_as_outcome_not_error() {
        let repo = FakeRepo::rejecting("Artwork is no longer available");
        let service = OrderService::new(repo);

        let outcome = service.place(complete_form()).expect("placement");
        assert_eq!(
            outcome,
            PlacementOutcome::Rejected {
                reason: "Artwork is no longer available".to_string()
            }
        );
    }

    #[test]
    fn missing_required_fields_name_the_field_and_skip_the_repository() {
        for (strip, expected) in [
            (
                Box::new(|f: &mut OrderForm| f.customer_name = None) as Box<dyn Fn(&mut OrderForm)>,
                "Missing required field: customer_name",
            ),
            (
                Box::new(|f: &mut OrderForm| f.customer_email = None),
                "Missing required field: customer_email",
            ),
            (
                Box::new(|f: &mut OrderForm| f.artwork_id = None),
                "Missing required field: artwork_id",
            ),
        ] {
            let repo = FakeRepo::placing(1);
            let service = OrderService::new(repo.clone());

            let mut form = complete_form();
            strip(&mut form);

            match service.place(form) {
                Err(DomainError::Validation(msg)) => assert_eq!(msg, expected),
                other => panic!("expected validation error, got {other:?}"),
            }
            assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let repo = FakeRepo::placing(1);
        let service = OrderService::new(repo.clone());

        let mut form = complete_form();
        form.customer_email = Some(String::new());

        match service.place(form) {
            Err(DomainError::Validation(msg)) => {
                assert_eq!(msg, "Missing required field: customer_email")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_positive_artwork_id_is_rejected() {
        let repo = FakeRepo::placing(1);
        let service = OrderService::new(repo);

        let mut form = complete_form();
        form.artwork_id = Some(0);

        assert!(matches!(
            service.place(form),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn optional_fields_default_to_empty_strings() {
        let repo = FakeRepo::placing(1);
        let service = OrderService::new(repo.clone());

        let mut form = complete_form();
        form.customer_phone = None;
        form.shipping_address = None;
        form.notes = None;

        service.place(form).expect("placement");

        let order = repo.last_order.lock().unwrap().take().expect("order sent");
        assert_eq!(order.customer_phone, "");
        assert_eq!(order.shipping_address, "");
        assert_eq!(order.notes, "");
        assert_eq!(order.artwork_id, 3);
    }
}
