//! # Stack Discipline Tests
//!
//! PUSH/CALL pre-decrement SP before writing; POP/RET read and then
//! post-increment. The stack grows toward address 0 from the reset SP.

use ls8_core::Trap;
use ls8_core::config::Config;
use ls8_core::core::MachineState;
use proptest::prelude::*;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn test_push_predecrements_and_writes() {
    let program = ProgramBuilder::new().ldi(0, 0x99).push(0).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.step_n(2);
    assert_eq!(ctx.cpu.sp(), 0xF3);
    assert_eq!(ctx.cpu.ram.read(0xF3).unwrap(), 0x99);
    assert_eq!(ctx.cpu.pc, 5);
}

#[test]
fn test_pop_reads_then_increments() {
    let program = ProgramBuilder::new().ldi(0, 7).push(0).pop(4).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.step_n(3);
    assert_eq!(ctx.get_reg(4), 7);
    assert_eq!(ctx.cpu.sp(), 0xF4);
    assert_eq!(ctx.cpu.pc, 7);
}

#[test]
fn test_push_three_pop_reverse_order() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .push(0)
        .ldi(0, 2)
        .push(0)
        .ldi(0, 3)
        .push(0)
        .pop(1)
        .prn(1)
        .pop(1)
        .prn(1)
        .pop(1)
        .prn(1)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output_lines(), vec!["3", "2", "1"]);
    assert_eq!(ctx.cpu.sp(), 0xF4);
}

#[test]
fn test_call_and_return_resume_after_call() {
    // 0: LDI r1,SUB   3: LDI r0,5   6: CALL r1   8: PRN r0   10: HLT
    // 11: SUB: ADD r0,r0   14: RET
    let program = ProgramBuilder::new()
        .ldi(1, 11)
        .ldi(0, 5)
        .call(1)
        .prn(0)
        .hlt()
        .add(0, 0)
        .ret()
        .build();
    let mut ctx = TestContext::new().load_program(&program);

    ctx.step_n(3);
    assert_eq!(ctx.cpu.pc, 11);
    assert_eq!(ctx.cpu.sp(), 0xF3);
    assert_eq!(ctx.cpu.ram.read(0xF3).unwrap(), 8);

    ctx.step_n(2);
    assert_eq!(ctx.cpu.pc, 8);
    assert_eq!(ctx.cpu.sp(), 0xF4);

    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output(), "10\n");
}

#[test]
fn test_nested_calls() {
    // main calls A at 12; A calls B at 20; B sets r0 and both print on the way out.
    let program = ProgramBuilder::new()
        .ldi(1, 12) // 0
        .ldi(2, 20) // 3
        .call(1) // 6
        .prn(0) // 8
        .hlt() // 10
        .raw(&[0]) // 11
        .ldi(0, 1) // 12: A
        .call(2) // 15
        .prn(0) // 17
        .ret() // 19
        .ldi(0, 2) // 20: B
        .ret() // 23
        .build();
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run().unwrap();
    assert_eq!(ctx.output_lines(), vec!["2", "2"]);
    assert_eq!(ctx.cpu.sp(), 0xF4);
    assert_eq!(ctx.cpu.stats.max_stack_depth, 2);
}

#[test]
fn test_push_at_address_zero_overflows() {
    let config: Config = serde_json::from_str(r#"{ "machine": { "initial_sp": 0 } }"#).unwrap();
    let program = ProgramBuilder::new().push(0).build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    assert!(matches!(ctx.step(), Err(Trap::StackOverflow { pc: 0 })));
    assert_eq!(ctx.cpu.sp(), 0);
    assert_eq!(ctx.cpu.state, MachineState::Faulted);
}

#[test]
fn test_call_at_address_zero_overflows() {
    let config: Config = serde_json::from_str(r#"{ "machine": { "initial_sp": 0 } }"#).unwrap();
    let program = ProgramBuilder::new().call(0).build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    assert!(matches!(ctx.step(), Err(Trap::StackOverflow { pc: 0 })));
}

#[test]
fn test_pop_at_top_of_memory_underflows() {
    let config: Config = serde_json::from_str(r#"{ "machine": { "initial_sp": 255 } }"#).unwrap();
    let program = ProgramBuilder::new().pop(0).build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    assert!(matches!(ctx.step(), Err(Trap::StackUnderflow { pc: 0 })));
    assert_eq!(ctx.cpu.sp(), 255);
    assert_eq!(ctx.get_reg(0), 0);
}

#[test]
fn test_ret_at_top_of_memory_underflows() {
    let config: Config = serde_json::from_str(r#"{ "machine": { "initial_sp": 255 } }"#).unwrap();
    let program = ProgramBuilder::new().ret().build();
    let mut ctx = TestContext::with_config(&config).load_program(&program);
    assert!(matches!(ctx.step(), Err(Trap::StackUnderflow { pc: 0 })));
}

#[test]
fn test_pop_into_sp_overwrites_sp() {
    let program = ProgramBuilder::new().ldi(0, 0x50).push(0).pop(7).hlt().build();
    let mut ctx = TestContext::new().load_program(&program);
    ctx.step_n(3);
    assert_eq!(ctx.cpu.sp(), 0x50);
}

proptest! {
    #[test]
    fn prop_push_pop_round_trip(reg in 0u8..7, val in any::<u8>()) {
        let program = ProgramBuilder::new().ldi(reg, val).push(reg).ldi(reg, 0).pop(reg).hlt().build();
        let mut ctx = TestContext::new().load_program(&program);
        ctx.step_n(2);
        let sp_after_push = ctx.cpu.sp();
        ctx.step_n(2);
        prop_assert_eq!(sp_after_push, 0xF3);
        prop_assert_eq!(ctx.get_reg(reg), val);
        prop_assert_eq!(ctx.cpu.sp(), 0xF4);
    }
}
