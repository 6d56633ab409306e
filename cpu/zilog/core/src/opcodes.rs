use crate::config::Opcodes;

/// How the operand bytes following an opcode are decoded
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decode {
	/// No operand
	NoArg,
	/// Immediate byte
	Byte,
	/// Immediate little endian word
	Word,
	/// Signed relative jump offset
	Jr,
	/// Restart address embedded in the mnemonic
	Rst,
	/// CB prefix
	Cb,
	/// ED prefix
	Ed,
	/// DD prefix
	Dd,
	/// FD prefix
	Fd,
	/// Index register displacement
	Index,
	/// Index register displacement followed by an immediate byte
	IndexByte,
	/// DDCB/FDCB prefix; displacement precedes the final opcode
	IndexCb,
	/// Not an operation; rendered as DEFB
	Defb,
}

/// An opcode table entry; `{}` in the mnemonic marks each operand
#[derive(Clone, Copy, Debug)]
pub struct Opcode {
	pub decode: Decode,
	pub mnemonic: &'static str,
	/// Group that must be enabled for the mnemonic to be used
	pub group: Opcodes,
}

/// Unprefixed operations
pub static OPCODES: [Opcode; 256] = [
	Opcode { decode: Decode::NoArg, mnemonic: "NOP", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD BC,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (BC),A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC BC", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC B", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD B,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RLCA", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "EX AF,AF'", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD HL,BC", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,(BC)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC BC", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC C", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD C,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RRCA", group: Opcodes::empty() },

	// 1x
	Opcode { decode: Decode::Jr, mnemonic: "DJNZ {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD DE,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (DE),A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC DE", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC D", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD D,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RLA", group: Opcodes::empty() },
	Opcode { decode: Decode::Jr, mnemonic: "JR {}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD HL,DE", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,(DE)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC DE", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC E", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD E,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RRA", group: Opcodes::empty() },

	// 2x
	Opcode { decode: Decode::Jr, mnemonic: "JR NZ,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD HL,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),HL", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC HL", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC H", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD H,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DAA", group: Opcodes::empty() },
	Opcode { decode: Decode::Jr, mnemonic: "JR Z,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD HL,HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD HL,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC HL", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC L", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD L,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CPL", group: Opcodes::empty() },

	// 3x
	Opcode { decode: Decode::Jr, mnemonic: "JR NC,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD SP,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC SP", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD (HL),{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SCF", group: Opcodes::empty() },
	Opcode { decode: Decode::Jr, mnemonic: "JR C,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD HL,SP", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD A,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC SP", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC A", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD A,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CCF", group: Opcodes::empty() },

	// 4x
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,A", group: Opcodes::empty() },

	// 5x
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,A", group: Opcodes::empty() },

	// 6x
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD H,A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD L,A", group: Opcodes::empty() },

	// 7x
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "HALT", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD (HL),A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,A", group: Opcodes::empty() },

	// 8x
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,A", group: Opcodes::empty() },

	// 9x
	Opcode { decode: Decode::NoArg, mnemonic: "SUB B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,(HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,A", group: Opcodes::empty() },

	// Ax
	Opcode { decode: Decode::NoArg, mnemonic: "AND B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR A", group: Opcodes::empty() },

	// Bx
	Opcode { decode: Decode::NoArg, mnemonic: "OR B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP A", group: Opcodes::empty() },

	// Cx
	Opcode { decode: Decode::NoArg, mnemonic: "RET NZ", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "POP BC", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP NZ,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL NZ,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "PUSH BC", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "ADD A,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 0", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RET Z", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RET", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP Z,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Cb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL Z,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "ADC A,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 8", group: Opcodes::empty() },

	// Dx
	Opcode { decode: Decode::NoArg, mnemonic: "RET NC", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "POP DE", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP NC,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "OUT ({}),A", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL NC,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "PUSH DE", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "SUB {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 16", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RET C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "EXX", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP C,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "IN A,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL C,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Dd, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "SBC A,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 24", group: Opcodes::empty() },

	// Ex
	Opcode { decode: Decode::NoArg, mnemonic: "RET PO", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "POP HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP PO,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "EX (SP),HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL PO,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "PUSH HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "AND {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 32", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RET PE", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "JP (HL)", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP PE,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "EX DE,HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL PE,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Ed, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "XOR {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 40", group: Opcodes::empty() },

	// Fx
	Opcode { decode: Decode::NoArg, mnemonic: "RET P", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "POP AF", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP P,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DI", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL P,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "PUSH AF", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "OR {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 48", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RET M", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD SP,HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "JP M,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "EI", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "CALL M,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Fd, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "CP {}", group: Opcodes::empty() },
	Opcode { decode: Decode::Rst, mnemonic: "RST 56", group: Opcodes::empty() },
];

/// ED-prefixed operations
pub static ED_OPCODES: [Opcode; 256] = [
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 1x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 2x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 3x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 4x
	Opcode { decode: Decode::NoArg, mnemonic: "IN B,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC HL,BC", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),BC", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 0", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD I,A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IN C,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC HL,BC", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD BC,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETI", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 0", group: Opcodes::IM },
	Opcode { decode: Decode::NoArg, mnemonic: "LD R,A", group: Opcodes::empty() },

	// 5x
	Opcode { decode: Decode::NoArg, mnemonic: "IN D,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC HL,DE", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),DE", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::RETN },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 1", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,I", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IN E,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC HL,DE", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD DE,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::RETN },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 2", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,R", group: Opcodes::empty() },

	// 6x
	Opcode { decode: Decode::NoArg, mnemonic: "IN H,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),H", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC HL,HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),HL", group: Opcodes::ED63 },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::RETN },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 0", group: Opcodes::IM },
	Opcode { decode: Decode::NoArg, mnemonic: "RRD", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IN L,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),L", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC HL,HL", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD HL,({})", group: Opcodes::ED6B },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::RETN },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 0", group: Opcodes::IM },
	Opcode { decode: Decode::NoArg, mnemonic: "RLD", group: Opcodes::empty() },

	// 7x
	Opcode { decode: Decode::NoArg, mnemonic: "IN F,(C)", group: Opcodes::ED70 },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),0", group: Opcodes::ED71 },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC HL,SP", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),SP", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::RETN },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 1", group: Opcodes::IM },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IN A,(C)", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUT (C),A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC HL,SP", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD SP,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "NEG", group: Opcodes::NEG },
	Opcode { decode: Decode::NoArg, mnemonic: "RETN", group: Opcodes::RETN },
	Opcode { decode: Decode::NoArg, mnemonic: "IM 2", group: Opcodes::IM },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 8x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 9x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Ax
	Opcode { decode: Decode::NoArg, mnemonic: "LDI", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CPI", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INI", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUTI", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LDD", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CPD", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "IND", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OUTD", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Bx
	Opcode { decode: Decode::NoArg, mnemonic: "LDIR", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CPIR", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INIR", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OTIR", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LDDR", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CPDR", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INDR", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OTDR", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Cx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Dx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Ex
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Fx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
];

/// DD-prefixed operations; FD-prefixed ones are derived by replacing IX with IY
pub static DD_OPCODES: [Opcode; 256] = [
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD IX,BC", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 1x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD IX,DE", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 2x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD IX,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD ({}),IX", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC IX", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD IXh,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD IX,IX", group: Opcodes::empty() },
	Opcode { decode: Decode::Word, mnemonic: "LD IX,({})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC IX", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "INC IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "DEC IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Byte, mnemonic: "LD IXl,{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 3x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "INC (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "DEC (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::IndexByte, mnemonic: "LD (IX{}),{}", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD IX,SP", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 4x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD B,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD B,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD C,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD C,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 5x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD D,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD D,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD E,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD E,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 6x
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD H,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXh,A", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,B", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,C", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,D", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,E", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD L,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD IXl,A", group: Opcodes::empty() },

	// 7x
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),B", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),C", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),D", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),E", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),H", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),L", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD (IX{}),A", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD A,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "LD A,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 8x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADD A,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "ADD A,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "ADC A,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "ADC A,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// 9x
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SUB IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SUB (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "SBC A,IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SBC A,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Ax
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "AND IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "AND (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "XOR IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "XOR (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Bx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "OR IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "OR (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP IXh", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "CP IXl", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "CP (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Cx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::IndexCb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Dx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Ex
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "POP IX", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "EX (SP),IX", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "PUSH IX", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "JP (IX)", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },

	// Fx
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::NoArg, mnemonic: "LD SP,IX", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
	Opcode { decode: Decode::Defb, mnemonic: "", group: Opcodes::empty() },
];

/// CB-prefixed operations
pub static CB_OPCODES: [&str; 256] = [
	"RLC B", "RLC C", "RLC D", "RLC E", "RLC H", "RLC L", "RLC (HL)", "RLC A",
	"RRC B", "RRC C", "RRC D", "RRC E", "RRC H", "RRC L", "RRC (HL)", "RRC A",

	// 1x
	"RL B", "RL C", "RL D", "RL E", "RL H", "RL L", "RL (HL)", "RL A",
	"RR B", "RR C", "RR D", "RR E", "RR H", "RR L", "RR (HL)", "RR A",

	// 2x
	"SLA B", "SLA C", "SLA D", "SLA E", "SLA H", "SLA L", "SLA (HL)", "SLA A",
	"SRA B", "SRA C", "SRA D", "SRA E", "SRA H", "SRA L", "SRA (HL)", "SRA A",

	// 3x
	"SLL B", "SLL C", "SLL D", "SLL E", "SLL H", "SLL L", "SLL (HL)", "SLL A",
	"SRL B", "SRL C", "SRL D", "SRL E", "SRL H", "SRL L", "SRL (HL)", "SRL A",

	// 4x
	"BIT 0,B", "BIT 0,C", "BIT 0,D", "BIT 0,E", "BIT 0,H", "BIT 0,L", "BIT 0,(HL)", "BIT 0,A",
	"BIT 1,B", "BIT 1,C", "BIT 1,D", "BIT 1,E", "BIT 1,H", "BIT 1,L", "BIT 1,(HL)", "BIT 1,A",

	// 5x
	"BIT 2,B", "BIT 2,C", "BIT 2,D", "BIT 2,E", "BIT 2,H", "BIT 2,L", "BIT 2,(HL)", "BIT 2,A",
	"BIT 3,B", "BIT 3,C", "BIT 3,D", "BIT 3,E", "BIT 3,H", "BIT 3,L", "BIT 3,(HL)", "BIT 3,A",

	// 6x
	"BIT 4,B", "BIT 4,C", "BIT 4,D", "BIT 4,E", "BIT 4,H", "BIT 4,L", "BIT 4,(HL)", "BIT 4,A",
	"BIT 5,B", "BIT 5,C", "BIT 5,D", "BIT 5,E", "BIT 5,H", "BIT 5,L", "BIT 5,(HL)", "BIT 5,A",

	// 7x
	"BIT 6,B", "BIT 6,C", "BIT 6,D", "BIT 6,E", "BIT 6,H", "BIT 6,L", "BIT 6,(HL)", "BIT 6,A",
	"BIT 7,B", "BIT 7,C", "BIT 7,D", "BIT 7,E", "BIT 7,H", "BIT 7,L", "BIT 7,(HL)", "BIT 7,A",

	// 8x
	"RES 0,B", "RES 0,C", "RES 0,D", "RES 0,E", "RES 0,H", "RES 0,L", "RES 0,(HL)", "RES 0,A",
	"RES 1,B", "RES 1,C", "RES 1,D", "RES 1,E", "RES 1,H", "RES 1,L", "RES 1,(HL)", "RES 1,A",

	// 9x
	"RES 2,B", "RES 2,C", "RES 2,D", "RES 2,E", "RES 2,H", "RES 2,L", "RES 2,(HL)", "RES 2,A",
	"RES 3,B", "RES 3,C", "RES 3,D", "RES 3,E", "RES 3,H", "RES 3,L", "RES 3,(HL)", "RES 3,A",

	// Ax
	"RES 4,B", "RES 4,C", "RES 4,D", "RES 4,E", "RES 4,H", "RES 4,L", "RES 4,(HL)", "RES 4,A",
	"RES 5,B", "RES 5,C", "RES 5,D", "RES 5,E", "RES 5,H", "RES 5,L", "RES 5,(HL)", "RES 5,A",

	// Bx
	"RES 6,B", "RES 6,C", "RES 6,D", "RES 6,E", "RES 6,H", "RES 6,L", "RES 6,(HL)", "RES 6,A",
	"RES 7,B", "RES 7,C", "RES 7,D", "RES 7,E", "RES 7,H", "RES 7,L", "RES 7,(HL)", "RES 7,A",

	// Cx
	"SET 0,B", "SET 0,C", "SET 0,D", "SET 0,E", "SET 0,H", "SET 0,L", "SET 0,(HL)", "SET 0,A",
	"SET 1,B", "SET 1,C", "SET 1,D", "SET 1,E", "SET 1,H", "SET 1,L", "SET 1,(HL)", "SET 1,A",

	// Dx
	"SET 2,B", "SET 2,C", "SET 2,D", "SET 2,E", "SET 2,H", "SET 2,L", "SET 2,(HL)", "SET 2,A",
	"SET 3,B", "SET 3,C", "SET 3,D", "SET 3,E", "SET 3,H", "SET 3,L", "SET 3,(HL)", "SET 3,A",

	// Ex
	"SET 4,B", "SET 4,C", "SET 4,D", "SET 4,E", "SET 4,H", "SET 4,L", "SET 4,(HL)", "SET 4,A",
	"SET 5,B", "SET 5,C", "SET 5,D", "SET 5,E", "SET 5,H", "SET 5,L", "SET 5,(HL)", "SET 5,A",

	// Fx
	"SET 6,B", "SET 6,C", "SET 6,D", "SET 6,E", "SET 6,H", "SET 6,L", "SET 6,(HL)", "SET 6,A",
	"SET 7,B", "SET 7,C", "SET 7,D", "SET 7,E", "SET 7,H", "SET 7,L", "SET 7,(HL)", "SET 7,A",
];

/// DDCB-prefixed operations
pub static DDCB_OPCODES: [Opcode; 256] = [
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IX{}),A", group: Opcodes::XYCB },

	// 1x
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RL (IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RR (IX{}),A", group: Opcodes::XYCB },

	// 2x
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IX{}),A", group: Opcodes::XYCB },

	// 3x
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IX{}),A", group: Opcodes::XYCB },

	// 4x
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IX{})", group: Opcodes::XYCB },

	// 5x
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IX{})", group: Opcodes::XYCB },

	// 6x
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IX{})", group: Opcodes::XYCB },

	// 7x
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IX{})", group: Opcodes::XYCB },

	// 8x
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IX{}),A", group: Opcodes::XYCB },

	// 9x
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IX{}),A", group: Opcodes::XYCB },

	// Ax
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IX{}),A", group: Opcodes::XYCB },

	// Bx
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IX{}),A", group: Opcodes::XYCB },

	// Cx
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IX{}),A", group: Opcodes::XYCB },

	// Dx
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IX{}),A", group: Opcodes::XYCB },

	// Ex
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IX{}),A", group: Opcodes::XYCB },

	// Fx
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IX{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IX{}),A", group: Opcodes::XYCB },
];

/// FDCB-prefixed operations
pub static FDCB_OPCODES: [Opcode; 256] = [
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RLC (IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RRC (IY{}),A", group: Opcodes::XYCB },

	// 1x
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RL (IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RR (IY{}),A", group: Opcodes::XYCB },

	// 2x
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SLA (IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SRA (IY{}),A", group: Opcodes::XYCB },

	// 3x
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SLL (IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SRL (IY{}),A", group: Opcodes::XYCB },

	// 4x
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 0,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 1,(IY{})", group: Opcodes::XYCB },

	// 5x
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 2,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 3,(IY{})", group: Opcodes::XYCB },

	// 6x
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 4,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 5,(IY{})", group: Opcodes::XYCB },

	// 7x
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 6,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "BIT 7,(IY{})", group: Opcodes::XYCB },

	// 8x
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 0,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 1,(IY{}),A", group: Opcodes::XYCB },

	// 9x
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 2,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 3,(IY{}),A", group: Opcodes::XYCB },

	// Ax
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 4,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 5,(IY{}),A", group: Opcodes::XYCB },

	// Bx
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 6,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "RES 7,(IY{}),A", group: Opcodes::XYCB },

	// Cx
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 0,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 1,(IY{}),A", group: Opcodes::XYCB },

	// Dx
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 2,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 3,(IY{}),A", group: Opcodes::XYCB },

	// Ex
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 4,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 5,(IY{}),A", group: Opcodes::XYCB },

	// Fx
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 6,(IY{}),A", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),B", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),C", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),D", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),E", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),H", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),L", group: Opcodes::XYCB },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{})", group: Opcodes::empty() },
	Opcode { decode: Decode::Index, mnemonic: "SET 7,(IY{}),A", group: Opcodes::XYCB },
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tables() {
		assert_eq!(OPCODES[0xC9].mnemonic, "RET");
		assert_eq!(OPCODES[0xFF].mnemonic, "RST 56");
		assert_eq!(OPCODES[0x76].mnemonic, "HALT");
		assert_eq!(ED_OPCODES[0x63].group, Opcodes::ED63);
		assert_eq!(ED_OPCODES[0x4D].mnemonic, "RETI");
		assert_eq!(ED_OPCODES[0x77].decode, Decode::Defb);
		assert_eq!(DD_OPCODES[0x00].decode, Decode::Defb);
		assert_eq!(DD_OPCODES[0x65].mnemonic, "LD IXh,IXl");
		assert_eq!(DD_OPCODES[0x66].mnemonic, "LD H,(IX{})");
		assert_eq!(CB_OPCODES[0x36], "SLL (HL)");
		assert_eq!(CB_OPCODES[0xFF], "SET 7,A");
	}

	#[test]
	fn test_index_bit_tables() {
		for op in 0..256 {
			let (x, y) = (&DDCB_OPCODES[op], &FDCB_OPCODES[op]);

			assert_eq!(x.mnemonic.replace("IX", "IY"), y.mnemonic);
			assert_eq!(x.group, y.group);
			assert_eq!(x.group.is_empty(), op & 7 == 6 && op != 0x36);
		}
		assert_eq!(DDCB_OPCODES[0x06].mnemonic, "RLC (IX{})");
		assert_eq!(FDCB_OPCODES[0x47].mnemonic, "BIT 0,(IY{})");
		assert_eq!(FDCB_OPCODES[0xC7].mnemonic, "SET 0,(IY{}),A");
	}
}
