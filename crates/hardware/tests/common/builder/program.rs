use pipesim_core::core::arch::Program;
use pipesim_core::isa::Instruction;

/// Fluent builder for test programs.
///
/// Argument order follows the assembly text of each instruction.
#[derive(Clone, Default)]
pub struct ProgramBuilder {
    insts: Vec<Instruction>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `lw rt, imm(rs)`
    pub fn lw(mut self, rt: usize, imm: i64, rs: usize) -> Self {
        self.insts.push(Instruction::load(rt, imm, rs));
        self
    }

    /// `sw imm(rs), rt`
    pub fn sw(mut self, imm: i64, rs: usize, rt: usize) -> Self {
        self.insts.push(Instruction::store(imm, rs, rt));
        self
    }

    /// `add rd, rs, rt`
    pub fn add(mut self, rd: usize, rs: usize, rt: usize) -> Self {
        self.insts.push(Instruction::add(rd, rs, rt));
        self
    }

    /// `beqz rs, imm`
    pub fn beqz(mut self, rs: usize, imm: i64) -> Self {
        self.insts.push(Instruction::beqz(rs, imm));
        self
    }

    /// `nop`
    pub fn nop(mut self) -> Self {
        self.insts.push(Instruction::nop());
        self
    }

    pub fn build(self) -> Program {
        Program::new(self.insts)
    }

    /// Renders the program as loader input: one 32-character binary line per instruction.
    pub fn to_text(&self) -> String {
        self.insts
            .iter()
            .map(|inst| format!("{:032b}\n", inst.encode()))
            .collect()
    }
}
