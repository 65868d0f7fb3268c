use std::collections::HashSet;

use proptest::prelude::*;
use susplay::windows::{PanelId, WindowManager};

#[derive(Debug, Clone, Copy)]
enum WindowOp {
    Toggle(PanelId),
    Close(PanelId),
    Front(PanelId),
}

fn op_strategy() -> impl Strategy<Value = WindowOp> {
    let panel = prop::sample::select(PanelId::ALL.to_vec());
    prop_oneof![
        panel.clone().prop_map(WindowOp::Toggle),
        panel.clone().prop_map(WindowOp::Close),
        panel.prop_map(WindowOp::Front),
    ]
}

fn assert_single_front(windows: &WindowManager) -> Result<(), TestCaseError> {
    let orders: Vec<u32> = windows.windows().iter().map(|w| w.z_order).collect();
    let unique: HashSet<u32> = orders.iter().copied().collect();
    prop_assert_eq!(unique.len(), orders.len());

    let max = orders.iter().copied().max().unwrap_or(0);
    prop_assert_eq!(orders.iter().filter(|z| **z == max).count(), 1);
    let front = windows.front().unwrap();
    prop_assert_eq!(windows.get(front).unwrap().z_order, max);
    Ok(())
}

proptest! {
    #[test]
    fn z_orders_stay_distinct_with_single_front(
        ops in proptest::collection::vec(op_strategy(), 0..64),
    ) {
        let mut windows = WindowManager::new();
        assert_single_front(&windows)?;

        for op in ops {
            match op {
                WindowOp::Toggle(id) => {
                    let opened = windows.toggle(id).unwrap();
                    if opened {
                        prop_assert_eq!(windows.front(), Some(id));
                    }
                }
                WindowOp::Close(id) => {
                    windows.close(id);
                    prop_assert!(!windows.is_open(id));
                }
                WindowOp::Front(id) => {
                    windows.bring_to_front(id);
                    prop_assert_eq!(windows.front(), Some(id));
                }
            }
            assert_single_front(&windows)?;
        }
    }
}
