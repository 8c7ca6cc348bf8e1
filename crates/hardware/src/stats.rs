//! Run statistics collection and reporting.
//!
//! This module tracks execution metrics for the LS-8 emulator. It provides:
//! 1. **Cycles:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, load/store, stack, branch, I/O).
//! 3. **Control flow:** Taken jumps versus fall-throughs.

use std::time::Instant;

use crate::isa::Opcode;

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles elapsed (including a cycle that failed).
    pub cycles: u64,
    /// Number of instructions that completed.
    pub instructions_retired: u64,

    /// `ADD`, `MUL`, `CMP`.
    pub inst_alu: u64,
    /// `LDI`, `ST`.
    pub inst_load_store: u64,
    /// `PUSH`, `POP`.
    pub inst_stack: u64,
    /// `CALL`, `RET`, `JMP`, `JEQ`, `JNE`.
    pub inst_branch: u64,
    /// `PRN`.
    pub inst_io: u64,
    /// `HLT`.
    pub inst_system: u64,

    /// Control transfers that redirected the PC.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load_store: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_io: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Records a retired instruction.
    ///
    /// `jumped` is whether the handler redirected the PC.
    pub fn record(&mut self, op: Opcode, jumped: bool) {
        self.instructions_retired += 1;
        match op {
            Opcode::Add | Opcode::Mul | Opcode::Cmp => self.inst_alu += 1,
            Opcode::Ldi | Opcode::St => self.inst_load_store += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Prn => self.inst_io += 1,
            Opcode::Hlt => self.inst_system += 1,
            Opcode::Call | Opcode::Ret | Opcode::Jmp | Opcode::Jeq | Opcode::Jne => {
                self.inst_branch += 1;
                if jumped {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
        }
    }

    /// Prints the statistics report to stderr.
    ///
    /// Program output owns stdout, so the report never mixes with it.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        eprintln!("\n==========================================================");
        eprintln!("LS-8 RUN STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.6} s");
        eprintln!("sim_cycles               {}", self.cycles);
        eprintln!("sim_insts                {}", self.instructions_retired);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!(
            "  alu                    {} ({:.2}%)",
            self.inst_alu,
            pct(self.inst_alu)
        );
        eprintln!(
            "  load_store             {} ({:.2}%)",
            self.inst_load_store,
            pct(self.inst_load_store)
        );
        eprintln!(
            "  stack                  {} ({:.2}%)",
            self.inst_stack,
            pct(self.inst_stack)
        );
        eprintln!(
            "  branch                 {} ({:.2}%)",
            self.inst_branch,
            pct(self.inst_branch)
        );
        eprintln!(
            "  io                     {} ({:.2}%)",
            self.inst_io,
            pct(self.inst_io)
        );
        eprintln!(
            "  system                 {} ({:.2}%)",
            self.inst_system,
            pct(self.inst_system)
        );
        eprintln!("----------------------------------------------------------");
        eprintln!("CONTROL FLOW");
        eprintln!("  branch.taken           {}", self.branches_taken);
        eprintln!("  branch.not_taken       {}", self.branches_not_taken);
        eprintln!("==========================================================");
    }
}
