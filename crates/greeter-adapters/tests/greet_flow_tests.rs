//! Integration tests: GreetService driving a real ConsoleWriter.

use std::{cell::RefCell, io};

use greeter_adapters::{ConsoleWriter, SharedBuffer};
use greeter_core::prelude::*;

fn service_with_buffer() -> (GreetService<ConsoleWriter<SharedBuffer>>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let service = GreetService::new(ConsoleWriter::new(buffer.clone()));
    (service, buffer)
}

#[test]
fn greets_valid_name() {
    let (service, buffer) = service_with_buffer();

    let result = service.execute(&Context::background(), GreetCommand::new("Alice"));

    assert!(result.is_ok());
    assert_eq!(buffer.contents(), "Hello, Alice!\n");
}

#[test]
fn preserves_spaces_and_unicode() {
    let (service, buffer) = service_with_buffer();
    let ctx = Context::background();

    service.execute(&ctx, GreetCommand::new("Bob Smith")).value();
    service.execute(&ctx, GreetCommand::new("José 世界")).value();

    assert_eq!(buffer.contents(), "Hello, Bob Smith!\nHello, José 世界!\n");
}

#[test]
fn empty_name_writes_nothing() {
    let (service, buffer) = service_with_buffer();

    let err = service
        .execute(&Context::background(), GreetCommand::new(""))
        .error_info();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("empty"));
    assert!(buffer.is_empty());
}

#[test]
fn boundary_lengths() {
    let (service, buffer) = service_with_buffer();
    let ctx = Context::background();

    let max = "x".repeat(MAX_NAME_LENGTH);
    assert!(service.execute(&ctx, GreetCommand::new(max.clone())).is_ok());
    assert_eq!(buffer.contents(), format!("Hello, {max}!\n"));

    buffer.clear();
    let err = service
        .execute(&ctx, GreetCommand::new("x".repeat(MAX_NAME_LENGTH + 1)))
        .error_info();
    assert!(err.message.contains("exceeds"));
    assert!(buffer.is_empty());
}

#[test]
fn cancelled_context_yields_infrastructure_error() {
    let (service, buffer) = service_with_buffer();
    let (ctx, handle) = Context::cancellable();
    handle.cancel();

    let err = service.execute(&ctx, GreetCommand::new("Alice")).error_info();

    assert_eq!(err.kind, ErrorKind::Infrastructure);
    assert!(err.message.starts_with("write cancelled:"));
    assert!(buffer.is_empty());
}

#[test]
fn validation_runs_before_cancellation_check() {
    let (service, _buffer) = service_with_buffer();
    let (ctx, handle) = Context::cancellable();
    handle.cancel();

    let err = service.execute(&ctx, GreetCommand::new("")).error_info();

    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn io_failure_surfaces_through_use_case() {
    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let service = GreetService::new(ConsoleWriter::new(ClosedPipe));

    let err = service
        .execute(&Context::background(), GreetCommand::new("Alice"))
        .error_info();

    assert_eq!(err.kind, ErrorKind::Infrastructure);
    assert!(err.message.starts_with("write failed:"));
}

#[test]
fn railway_chain_over_use_case_result() {
    let (service, buffer) = service_with_buffer();
    let log = RefCell::new(Vec::new());

    let status = service
        .execute(&Context::background(), GreetCommand::new(""))
        .tap(|_| log.borrow_mut().push("ok"), |_| log.borrow_mut().push("err"))
        .recover_with(|_| service.execute(&Context::background(), GreetCommand::new("Guest")))
        .map(|()| "recovered")
        .unwrap_or("failed");

    assert_eq!(status, "recovered");
    assert_eq!(log.into_inner(), ["err"]);
    assert_eq!(buffer.contents(), "Hello, Guest!\n");
}

#[test]
fn writer_is_reachable_through_service() {
    let buffer = SharedBuffer::new();
    let service = GreetService::new(ConsoleWriter::new(buffer.clone()));

    service
        .writer()
        .write(&Context::background(), "direct")
        .value();

    assert_eq!(buffer.contents(), "direct\n");
}
