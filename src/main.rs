#[macro_use]
extern crate log;

use classic_collections::binary_search_tree::BinarySearchTree;
use classic_collections::queue::{Queue, Queueable};
use classic_collections::search::{BinarySearch, IterativeBinarySearch, RecursiveBinarySearch};
use classic_collections::sort::{BottomUpMergeSort, InsertionSort, MergeSort, Sort};
use classic_collections::stack::{Stack, Stackable};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::error::Error;

fn names() -> Vec<&'static str> {
    vec!["Carl", "Lisa", "Stephanie", "Jeff", "Wade"]
}

fn containers() {
    let mut stack = Stack::from(names());
    stack.push("Mike");
    info!("stack: {:?}", stack);
    info!("popped {:?}, top is now {:?}", stack.pop(), stack.top());

    let mut queue = Queue::from(names());
    queue.enqueue("Mike");
    info!("queue: {:?}", queue);
    info!("dequeued {:?}, front is now {:?}", queue.dequeue(), queue.front());
}

fn searches() {
    let mut numbers = vec![11, 59, 3, 2, 53, 17, 31, 7, 19, 67, 47, 13, 37, 61, 29, 43, 5, 41, 23];
    numbers.sort();
    for key in &[2, 67, 43, 42] {
        info!(
            "searching {}: recursive {:?}, iterative {:?}",
            key,
            RecursiveBinarySearch.search(&numbers, key),
            IterativeBinarySearch.search(&numbers, key),
        );
    }
}

fn sorts() {
    let list = vec![10, -1, 3, 9, 2, 27, 8, 5, 1, 3, 0, 26];
    info!("insertion sort <: {:?}", InsertionSort.sort_by(list.clone(), |a, b| a < b));
    info!("insertion sort >: {:?}", InsertionSort.sort_by(list, |a, b| a > b));

    info!("merge sort: {:?}", MergeSort.sort(vec![2, 1, 5, 4, 9]));
    info!(
        "bottom-up merge sort: {:?}",
        BottomUpMergeSort.sort(vec!["Tom", "Harry", "Ron", "Chandler", "Monica"]),
    );
}

fn tree() {
    let mut tree: BinarySearchTree<i32> = vec![7, 2, 5, 10, 9, 1].into_iter().collect();
    info!("tree in-order: {:?}", tree.map(|value| *value));
    if let Some(node) = tree.search(&5) {
        info!(
            "5 has depth {}, predecessor {:?}, successor {:?}",
            node.depth(),
            node.predecessor().map(|n| n.value()),
            node.successor().map(|n| n.value()),
        );
    }
    tree.remove(&7);
    info!("after removing 7, root is {:?}", tree.root().map(|n| n.value()));
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::init(LevelFilter::Info, Config::default())
        .map_err(|err| format!("failed to initialize logger: {}", err))?;

    containers();
    searches();
    sorts();
    tree();
    Ok(())
}
