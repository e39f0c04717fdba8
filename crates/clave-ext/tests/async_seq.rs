//! Integration tests for the operators over futures.

#![cfg(feature = "async")]

use std::cell::Cell;

use clave_ext::prelude::*;
use futures::executor::block_on;
use futures::future::ready;

async fn load_numbers() -> Vec<i32> {
    vec![1, 2, 3, 4, 5]
}

#[test]
fn filter_then_collect() {
    let even = block_on(load_numbers().filter_seq(|n| n % 2 == 0).to_list());
    assert_eq!(even, vec![2, 4]);
}

#[test]
fn where_not_then_collect() {
    let odd = block_on(load_numbers().where_not(|n| n % 2 == 0).to_list());
    assert_eq!(odd, vec![1, 3, 5]);
}

#[test]
fn map_seq_chains_with_sync_operators() {
    let labels = block_on(load_numbers().map_seq(|n| format!("#{n}")));
    assert_eq!(labels.take(2).join_with(" "), "#1 #2");
}

#[test]
fn operators_are_lazy_until_polled() {
    let polled = Cell::new(false);
    let source = async {
        polled.set(true);
        vec![1]
    };

    let pending = source.where_not(|_| false).to_list();
    assert!(!polled.get());

    assert_eq!(block_on(pending), vec![1]);
    assert!(polled.get());
}

#[test]
fn when_all_in_input_order() {
    let lookups = vec![ready("a"), ready("b"), ready("c")];
    assert_eq!(block_on(lookups.when_all()), vec!["a", "b", "c"]);
}

#[test]
fn when_all_over_async_fns() {
    async fn square(n: u64) -> u64 {
        n * n
    }

    let squares = block_on((1..=4).map(square).when_all());
    assert_eq!(squares, vec![1, 4, 9, 16]);
}
