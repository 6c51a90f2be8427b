//! Integration test: render components in a headless `VirtualDom` and
//! inspect what changes between renders.

#![allow(clippy::unwrap_used)]

use std::cell::Cell;
use std::rc::Rc;

use dioxus::dioxus_core::{Mutation, Mutations, NoOpMutations, ScopeId, VirtualDom};
use dioxus::prelude::*;
use pratilipi_core::UploadForm;
use pratilipi_io::{FileDrop, SignalForm};

#[derive(Props, Clone, PartialEq)]
struct DropZoneProps {
    epoch: Rc<Cell<u32>>,
}

fn drop_zone(props: DropZoneProps) -> Element {
    rsx! {
        FileDrop {
            dragging: false,
            picker_epoch: props.epoch.get(),
            on_file: move |_| {},
            on_drag: move |_| {},
            on_clear: move |_| {},
            on_read_error: move |_| {},
        }
    }
}

/// Re-render the drop zone after setting the epoch to `next`.
fn rerender_with_epoch(start: u32, next: u32) -> Vec<Mutation> {
    let epoch = Rc::new(Cell::new(start));
    let mut dom = VirtualDom::new_with_props(
        drop_zone,
        DropZoneProps {
            epoch: Rc::clone(&epoch),
        },
    );
    dom.rebuild_in_place();

    epoch.set(next);
    dom.mark_dirty(ScopeId::APP);
    let mut mutations = Mutations::default();
    dom.render_immediate(&mut mutations);
    mutations.edits
}

#[test]
fn new_picker_epoch_replaces_file_input() {
    let edits = rerender_with_epoch(0, 1);
    assert!(
        edits.iter().any(|m| matches!(m, Mutation::ReplaceWith { .. })),
        "file input was not replaced: {edits:?}"
    );
}

#[test]
fn same_picker_epoch_keeps_file_input() {
    let edits = rerender_with_epoch(3, 3);
    assert!(edits.is_empty(), "unexpected edits: {edits:?}");
}

#[derive(Props, Clone, PartialEq)]
struct CountingProps {
    renders: Rc<Cell<usize>>,
    handle: Rc<Cell<Option<SignalForm>>>,
}

fn counting(props: CountingProps) -> Element {
    let form = use_signal(UploadForm::new);
    props.renders.set(props.renders.get() + 1);
    props.handle.set(Some(SignalForm(form)));
    let dragging = form().is_dragging();

    rsx! {
        div { "{dragging}" }
    }
}

#[test]
fn repeated_drag_state_does_not_rerender() {
    let renders = Rc::new(Cell::new(0));
    let handle = Rc::new(Cell::new(None));
    let mut dom = VirtualDom::new_with_props(
        counting,
        CountingProps {
            renders: Rc::clone(&renders),
            handle: Rc::clone(&handle),
        },
    );
    dom.rebuild_in_place();
    assert_eq!(renders.get(), 1);
    let form = handle.get().unwrap();

    dom.in_runtime(|| form.set_dragging(true));
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(renders.get(), 2);

    dom.in_runtime(|| form.set_dragging(true));
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(renders.get(), 2);

    dom.in_runtime(|| form.set_dragging(false));
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(renders.get(), 3);
}
