//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle of the machine. It
//! performs the following:
//! 1. **Fetch:** Reads the instruction byte and both lookahead operand bytes.
//! 2. **Decode:** Maps the instruction byte onto an [`Opcode`].
//! 3. **Execute:** Applies the opcode to registers, memory, flags, and PC.
//! 4. **Fault Handling:** Moves the machine to `Faulted` on any trap.

use std::io::Write;

use tracing::{debug, trace, warn};

use super::{Cpu, ExitStatus, MachineState, StepOutcome};
use crate::common::error::Trap;
use crate::common::reg::Reg;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::isa::instruction::{AluOp, Opcode};

/// Where control goes after an instruction.
enum Flow {
    /// Advance PC by the instruction length.
    Next,
    /// Set PC to the given address.
    Jump(usize),
    /// Stop the machine.
    Halt,
}

impl Cpu {
    /// Runs until HLT or a trap.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for PRN output and trace lines.
    ///
    /// # Returns
    ///
    /// The exit status on HLT.
    ///
    /// # Errors
    ///
    /// Returns the trap that stopped the machine, or
    /// `Trap::InstructionLimitExceeded` once the configured budget is spent.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<ExitStatus, Trap> {
        loop {
            if let Some(limit) = self.max_instructions
                && self.state == MachineState::Running
                && self.stats.instructions_retired >= limit
            {
                self.state = MachineState::Faulted;
                warn!(pc = self.pc, limit, "instruction limit exceeded");
                return Err(Trap::InstructionLimitExceeded(limit));
            }

            if self.step(out)? == StepOutcome::Halted {
                return Ok(ExitStatus {
                    pc: self.pc,
                    instructions_retired: self.stats.instructions_retired,
                });
            }
        }
    }

    /// Executes a single instruction.
    ///
    /// On a halted machine this does nothing and reports `Halted`; on a
    /// faulted machine it returns `Trap::MachineStopped`.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for PRN output and trace lines.
    ///
    /// # Errors
    ///
    /// Returns the trap raised by the instruction, after which the machine is
    /// `Faulted`, or `Trap::MachineStopped` if it already was.
    pub fn step<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<StepOutcome, Trap> {
        match self.state {
            MachineState::Halted => return Ok(StepOutcome::Halted),
            MachineState::Faulted => return Err(Trap::MachineStopped),
            MachineState::Running => {}
        }

        match self.cycle(out) {
            Ok(StepOutcome::Halted) => {
                self.state = MachineState::Halted;
                debug!(
                    pc = self.pc,
                    retired = self.stats.instructions_retired,
                    "machine halted"
                );
                Ok(StepOutcome::Halted)
            }
            Ok(StepOutcome::Continue) => Ok(StepOutcome::Continue),
            Err(trap) => {
                self.state = MachineState::Faulted;
                warn!(pc = self.pc, %trap, "machine faulted");
                Err(trap)
            }
        }
    }

    /// One fetch-decode-execute cycle.
    fn cycle<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<StepOutcome, Trap> {
        if self.trace {
            writeln!(out, "{}", self.trace_line())?;
        }

        let pc = self.pc;
        let ir = self.read_mem(pc)?;
        let operand_a = self.read_mem(pc.saturating_add(1))?;
        let operand_b = self.read_mem(pc.saturating_add(2))?;

        let op = decode(ir, pc)?;
        trace!(pc, %op, operand_a, operand_b, "execute");

        let flow = self.execute(op, operand_a, operand_b, out)?;
        self.stats.retire(op);

        match flow {
            Flow::Next => self.pc = pc + op.length(),
            Flow::Jump(target) => self.pc = target,
            Flow::Halt => return Ok(StepOutcome::Halted),
        }
        Ok(StepOutcome::Continue)
    }

    /// Applies the semantics of `op`.
    fn execute<W: Write + ?Sized>(
        &mut self,
        op: Opcode,
        operand_a: u8,
        operand_b: u8,
        out: &mut W,
    ) -> Result<Flow, Trap> {
        let flow = match op {
            Opcode::Halt => Flow::Halt,
            Opcode::LoadImmediate => {
                let r = self.operand_reg(operand_a)?;
                self.regs.write(r, operand_b);
                Flow::Next
            }
            Opcode::PrintRegister => {
                let r = self.operand_reg(operand_a)?;
                writeln!(out, "{}", self.regs.read(r))?;
                Flow::Next
            }
            Opcode::Add | Opcode::Multiply => {
                let alu_op = op.alu_op().ok_or(Trap::IllegalInstruction {
                    opcode: op.byte(),
                    pc: self.pc,
                })?;
                self.alu(alu_op, operand_a, operand_b)?;
                Flow::Next
            }
            Opcode::Compare => {
                let ra = self.operand_reg(operand_a)?;
                let rb = self.operand_reg(operand_b)?;
                self.flags
                    .set(Alu::compare(self.regs.read(ra), self.regs.read(rb)));
                Flow::Next
            }
            Opcode::Push => {
                let r = self.operand_reg(operand_a)?;
                self.push(self.regs.read(r))?;
                Flow::Next
            }
            Opcode::Pop => {
                let r = self.operand_reg(operand_a)?;
                let val = self.pop()?;
                self.regs.write(r, val);
                Flow::Next
            }
            Opcode::Call => {
                let r = self.operand_reg(operand_a)?;
                // The fetch lookahead already faulted for any pc above 0xFD.
                self.push((self.pc + 2) as u8)?;
                Flow::Jump(self.regs.read(r) as usize)
            }
            Opcode::Return => Flow::Jump(self.pop()? as usize),
            Opcode::Jump => {
                let r = self.operand_reg(operand_a)?;
                Flow::Jump(self.regs.read(r) as usize)
            }
            Opcode::JumpIfEqual => self.branch(operand_a, self.flags.is_equal())?,
            Opcode::JumpIfNotEqual => self.branch(operand_a, !self.flags.is_equal())?,
        };
        Ok(flow)
    }

    /// Reads memory on behalf of the current instruction.
    fn read_mem(&self, addr: usize) -> Result<u8, Trap> {
        self.ram.read(addr).map_err(|e| e.at(self.pc))
    }

    /// Writes memory on behalf of the current instruction.
    fn write_mem(&mut self, addr: usize, val: u8) -> Result<(), Trap> {
        let pc = self.pc;
        self.ram.write(addr, val).map_err(|e| e.at(pc))
    }

    /// Validates a register operand against the current instruction.
    fn operand_reg(&self, operand: u8) -> Result<Reg, Trap> {
        Reg::new(operand).ok_or(Trap::InvalidRegister {
            index: operand,
            pc: self.pc,
        })
    }

    /// `reg[a] = reg[a] <op> reg[b]`.
    fn alu(&mut self, op: AluOp, operand_a: u8, operand_b: u8) -> Result<(), Trap> {
        let ra = self.operand_reg(operand_a)?;
        let rb = self.operand_reg(operand_b)?;
        let result = Alu::execute(op, self.regs.read(ra), self.regs.read(rb))?;
        self.regs.write(ra, result);
        Ok(())
    }

    /// Conditional jump to `reg[operand]`.
    fn branch(&mut self, operand: u8, taken: bool) -> Result<Flow, Trap> {
        let r = self.operand_reg(operand)?;
        self.stats.record_branch(taken);
        if taken {
            Ok(Flow::Jump(self.regs.read(r) as usize))
        } else {
            Ok(Flow::Next)
        }
    }

    /// Pre-decrements SP and stores `val` at the new top of stack.
    fn push(&mut self, val: u8) -> Result<(), Trap> {
        let sp = self
            .regs
            .sp()
            .checked_sub(1)
            .ok_or(Trap::StackOverflow { pc: self.pc })?;
        self.write_mem(sp as usize, val)?;
        self.regs.set_sp(sp);
        self.stats.record_stack_depth(self.initial_sp, sp);
        Ok(())
    }

    /// Reads the top of stack and post-increments SP.
    fn pop(&mut self) -> Result<u8, Trap> {
        let sp = self.regs.sp();
        let next = sp
            .checked_add(1)
            .ok_or(Trap::StackUnderflow { pc: self.pc })?;
        let val = self.read_mem(sp as usize)?;
        self.regs.set_sp(next);
        Ok(val)
    }
}
