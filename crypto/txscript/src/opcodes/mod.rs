#[macro_use]
mod macros;

/// First value in the range formed by the "small integer" Op# opcodes
pub const OP_SMALL_INT_MIN_VAL: u8 = 1;
/// Last value in the range formed by the "small integer" Op# opcodes
pub const OP_SMALL_INT_MAX_VAL: u8 = 16;
/// First value in the range formed by OpData# opcodes (where opcode == value)
pub const OP_DATA_MIN_VAL: u8 = self::codes::OpData1;
/// Last value in the range formed by OpData# opcodes (where opcode == value)
pub const OP_DATA_MAX_VAL: u8 = self::codes::OpData75;
/// Minus 1 value
pub const OP_1_NEGATE_VAL: u8 = 0x81;
/// The opcode right below Op1. Small integer opcodes encode `value + OP_INT_BASE`.
pub const OP_INT_BASE: u8 = self::codes::OpReserved;

/*
Every one of the 256 opcode values has exactly one canonical entry below.
Direct pushes are named OP_PUSHBYTES_n; the remaining unassigned values are
named OP_UNKNOWNn so that any byte renders and parses back.
*/
opcode_list! {
    opcode Op0<0x00>                   "OP_0"
    opcode OpData1<0x01>               "OP_PUSHBYTES_1"
    opcode OpData2<0x02>               "OP_PUSHBYTES_2"
    opcode OpData3<0x03>               "OP_PUSHBYTES_3"
    opcode OpData4<0x04>               "OP_PUSHBYTES_4"
    opcode OpData5<0x05>               "OP_PUSHBYTES_5"
    opcode OpData6<0x06>               "OP_PUSHBYTES_6"
    opcode OpData7<0x07>               "OP_PUSHBYTES_7"
    opcode OpData8<0x08>               "OP_PUSHBYTES_8"
    opcode OpData9<0x09>               "OP_PUSHBYTES_9"
    opcode OpData10<0x0a>              "OP_PUSHBYTES_10"
    opcode OpData11<0x0b>              "OP_PUSHBYTES_11"
    opcode OpData12<0x0c>              "OP_PUSHBYTES_12"
    opcode OpData13<0x0d>              "OP_PUSHBYTES_13"
    opcode OpData14<0x0e>              "OP_PUSHBYTES_14"
    opcode OpData15<0x0f>              "OP_PUSHBYTES_15"
    opcode OpData16<0x10>              "OP_PUSHBYTES_16"
    opcode OpData17<0x11>              "OP_PUSHBYTES_17"
    opcode OpData18<0x12>              "OP_PUSHBYTES_18"
    opcode OpData19<0x13>              "OP_PUSHBYTES_19"
    opcode OpData20<0x14>              "OP_PUSHBYTES_20"
    opcode OpData21<0x15>              "OP_PUSHBYTES_21"
    opcode OpData22<0x16>              "OP_PUSHBYTES_22"
    opcode OpData23<0x17>              "OP_PUSHBYTES_23"
    opcode OpData24<0x18>              "OP_PUSHBYTES_24"
    opcode OpData25<0x19>              "OP_PUSHBYTES_25"
    opcode OpData26<0x1a>              "OP_PUSHBYTES_26"
    opcode OpData27<0x1b>              "OP_PUSHBYTES_27"
    opcode OpData28<0x1c>              "OP_PUSHBYTES_28"
    opcode OpData29<0x1d>              "OP_PUSHBYTES_29"
    opcode OpData30<0x1e>              "OP_PUSHBYTES_30"
    opcode OpData31<0x1f>              "OP_PUSHBYTES_31"
    opcode OpData32<0x20>              "OP_PUSHBYTES_32"
    opcode OpData33<0x21>              "OP_PUSHBYTES_33"
    opcode OpData34<0x22>              "OP_PUSHBYTES_34"
    opcode OpData35<0x23>              "OP_PUSHBYTES_35"
    opcode OpData36<0x24>              "OP_PUSHBYTES_36"
    opcode OpData37<0x25>              "OP_PUSHBYTES_37"
    opcode OpData38<0x26>              "OP_PUSHBYTES_38"
    opcode OpData39<0x27>              "OP_PUSHBYTES_39"
    opcode OpData40<0x28>              "OP_PUSHBYTES_40"
    opcode OpData41<0x29>              "OP_PUSHBYTES_41"
    opcode OpData42<0x2a>              "OP_PUSHBYTES_42"
    opcode OpData43<0x2b>              "OP_PUSHBYTES_43"
    opcode OpData44<0x2c>              "OP_PUSHBYTES_44"
    opcode OpData45<0x2d>              "OP_PUSHBYTES_45"
    opcode OpData46<0x2e>              "OP_PUSHBYTES_46"
    opcode OpData47<0x2f>              "OP_PUSHBYTES_47"
    opcode OpData48<0x30>              "OP_PUSHBYTES_48"
    opcode OpData49<0x31>              "OP_PUSHBYTES_49"
    opcode OpData50<0x32>              "OP_PUSHBYTES_50"
    opcode OpData51<0x33>              "OP_PUSHBYTES_51"
    opcode OpData52<0x34>              "OP_PUSHBYTES_52"
    opcode OpData53<0x35>              "OP_PUSHBYTES_53"
    opcode OpData54<0x36>              "OP_PUSHBYTES_54"
    opcode OpData55<0x37>              "OP_PUSHBYTES_55"
    opcode OpData56<0x38>              "OP_PUSHBYTES_56"
    opcode OpData57<0x39>              "OP_PUSHBYTES_57"
    opcode OpData58<0x3a>              "OP_PUSHBYTES_58"
    opcode OpData59<0x3b>              "OP_PUSHBYTES_59"
    opcode OpData60<0x3c>              "OP_PUSHBYTES_60"
    opcode OpData61<0x3d>              "OP_PUSHBYTES_61"
    opcode OpData62<0x3e>              "OP_PUSHBYTES_62"
    opcode OpData63<0x3f>              "OP_PUSHBYTES_63"
    opcode OpData64<0x40>              "OP_PUSHBYTES_64"
    opcode OpData65<0x41>              "OP_PUSHBYTES_65"
    opcode OpData66<0x42>              "OP_PUSHBYTES_66"
    opcode OpData67<0x43>              "OP_PUSHBYTES_67"
    opcode OpData68<0x44>              "OP_PUSHBYTES_68"
    opcode OpData69<0x45>              "OP_PUSHBYTES_69"
    opcode OpData70<0x46>              "OP_PUSHBYTES_70"
    opcode OpData71<0x47>              "OP_PUSHBYTES_71"
    opcode OpData72<0x48>              "OP_PUSHBYTES_72"
    opcode OpData73<0x49>              "OP_PUSHBYTES_73"
    opcode OpData74<0x4a>              "OP_PUSHBYTES_74"
    opcode OpData75<0x4b>              "OP_PUSHBYTES_75"
    opcode OpPushData1<0x4c>           "OP_PUSHDATA1"
    opcode OpPushData2<0x4d>           "OP_PUSHDATA2"
    opcode OpPushData4<0x4e>           "OP_PUSHDATA4"
    opcode Op1Negate<0x4f>             "OP_1NEGATE"
    opcode OpReserved<0x50>            "OP_RESERVED"
    opcode Op1<0x51>                   "OP_1"
    opcode Op2<0x52>                   "OP_2"
    opcode Op3<0x53>                   "OP_3"
    opcode Op4<0x54>                   "OP_4"
    opcode Op5<0x55>                   "OP_5"
    opcode Op6<0x56>                   "OP_6"
    opcode Op7<0x57>                   "OP_7"
    opcode Op8<0x58>                   "OP_8"
    opcode Op9<0x59>                   "OP_9"
    opcode Op10<0x5a>                  "OP_10"
    opcode Op11<0x5b>                  "OP_11"
    opcode Op12<0x5c>                  "OP_12"
    opcode Op13<0x5d>                  "OP_13"
    opcode Op14<0x5e>                  "OP_14"
    opcode Op15<0x5f>                  "OP_15"
    opcode Op16<0x60>                  "OP_16"
    opcode OpNop<0x61>                 "OP_NOP"
    opcode OpVer<0x62>                 "OP_VER"
    opcode OpIf<0x63>                  "OP_IF"
    opcode OpNotIf<0x64>               "OP_NOTIF"
    opcode OpVerIf<0x65>               "OP_VERIF"
    opcode OpVerNotIf<0x66>            "OP_VERNOTIF"
    opcode OpElse<0x67>                "OP_ELSE"
    opcode OpEndIf<0x68>               "OP_ENDIF"
    opcode OpVerify<0x69>              "OP_VERIFY"
    opcode OpReturn<0x6a>              "OP_RETURN"
    opcode OpToAltStack<0x6b>          "OP_TOALTSTACK"
    opcode OpFromAltStack<0x6c>        "OP_FROMALTSTACK"
    opcode Op2Drop<0x6d>               "OP_2DROP"
    opcode Op2Dup<0x6e>                "OP_2DUP"
    opcode Op3Dup<0x6f>                "OP_3DUP"
    opcode Op2Over<0x70>               "OP_2OVER"
    opcode Op2Rot<0x71>                "OP_2ROT"
    opcode Op2Swap<0x72>               "OP_2SWAP"
    opcode OpIfDup<0x73>               "OP_IFDUP"
    opcode OpDepth<0x74>               "OP_DEPTH"
    opcode OpDrop<0x75>                "OP_DROP"
    opcode OpDup<0x76>                 "OP_DUP"
    opcode OpNip<0x77>                 "OP_NIP"
    opcode OpOver<0x78>                "OP_OVER"
    opcode OpPick<0x79>                "OP_PICK"
    opcode OpRoll<0x7a>                "OP_ROLL"
    opcode OpRot<0x7b>                 "OP_ROT"
    opcode OpSwap<0x7c>                "OP_SWAP"
    opcode OpTuck<0x7d>                "OP_TUCK"
    opcode OpCat<0x7e>                 "OP_CAT"
    opcode OpSubStr<0x7f>              "OP_SUBSTR"
    opcode OpLeft<0x80>                "OP_LEFT"
    opcode OpRight<0x81>               "OP_RIGHT"
    opcode OpSize<0x82>                "OP_SIZE"
    opcode OpInvert<0x83>              "OP_INVERT"
    opcode OpAnd<0x84>                 "OP_AND"
    opcode OpOr<0x85>                  "OP_OR"
    opcode OpXor<0x86>                 "OP_XOR"
    opcode OpEqual<0x87>               "OP_EQUAL"
    opcode OpEqualVerify<0x88>         "OP_EQUALVERIFY"
    opcode OpReserved1<0x89>           "OP_RESERVED1"
    opcode OpReserved2<0x8a>           "OP_RESERVED2"
    opcode Op1Add<0x8b>                "OP_1ADD"
    opcode Op1Sub<0x8c>                "OP_1SUB"
    opcode Op2Mul<0x8d>                "OP_2MUL"
    opcode Op2Div<0x8e>                "OP_2DIV"
    opcode OpNegate<0x8f>              "OP_NEGATE"
    opcode OpAbs<0x90>                 "OP_ABS"
    opcode OpNot<0x91>                 "OP_NOT"
    opcode Op0NotEqual<0x92>           "OP_0NOTEQUAL"
    opcode OpAdd<0x93>                 "OP_ADD"
    opcode OpSub<0x94>                 "OP_SUB"
    opcode OpMul<0x95>                 "OP_MUL"
    opcode OpDiv<0x96>                 "OP_DIV"
    opcode OpMod<0x97>                 "OP_MOD"
    opcode OpLShift<0x98>              "OP_LSHIFT"
    opcode OpRShift<0x99>              "OP_RSHIFT"
    opcode OpBoolAnd<0x9a>             "OP_BOOLAND"
    opcode OpBoolOr<0x9b>              "OP_BOOLOR"
    opcode OpNumEqual<0x9c>            "OP_NUMEQUAL"
    opcode OpNumEqualVerify<0x9d>      "OP_NUMEQUALVERIFY"
    opcode OpNumNotEqual<0x9e>         "OP_NUMNOTEQUAL"
    opcode OpLessThan<0x9f>            "OP_LESSTHAN"
    opcode OpGreaterThan<0xa0>         "OP_GREATERTHAN"
    opcode OpLessThanOrEqual<0xa1>     "OP_LESSTHANOREQUAL"
    opcode OpGreaterThanOrEqual<0xa2>  "OP_GREATERTHANOREQUAL"
    opcode OpMin<0xa3>                 "OP_MIN"
    opcode OpMax<0xa4>                 "OP_MAX"
    opcode OpWithin<0xa5>              "OP_WITHIN"
    opcode OpRipemd160<0xa6>           "OP_RIPEMD160"
    opcode OpSha1<0xa7>                "OP_SHA1"
    opcode OpSha256<0xa8>              "OP_SHA256"
    opcode OpHash160<0xa9>             "OP_HASH160"
    opcode OpHash256<0xaa>             "OP_HASH256"
    opcode OpCodeSeparator<0xab>       "OP_CODESEPARATOR"
    opcode OpCheckSig<0xac>            "OP_CHECKSIG"
    opcode OpCheckSigVerify<0xad>      "OP_CHECKSIGVERIFY"
    opcode OpCheckMultiSig<0xae>       "OP_CHECKMULTISIG"
    opcode OpCheckMultiSigVerify<0xaf> "OP_CHECKMULTISIGVERIFY"
    opcode OpNop1<0xb0>                "OP_NOP1"
    opcode OpCheckLockTimeVerify<0xb1> "OP_CHECKLOCKTIMEVERIFY"
    opcode OpCheckSequenceVerify<0xb2> "OP_CHECKSEQUENCEVERIFY"
    opcode OpNop4<0xb3>                "OP_NOP4"
    opcode OpNop5<0xb4>                "OP_NOP5"
    opcode OpNop6<0xb5>                "OP_NOP6"
    opcode OpNop7<0xb6>                "OP_NOP7"
    opcode OpNop8<0xb7>                "OP_NOP8"
    opcode OpNop9<0xb8>                "OP_NOP9"
    opcode OpNop10<0xb9>               "OP_NOP10"
    opcode OpCheckSigAdd<0xba>         "OP_CHECKSIGADD"
    opcode OpUnknown187<0xbb>          "OP_UNKNOWN187"
    opcode OpUnknown188<0xbc>          "OP_UNKNOWN188"
    opcode OpUnknown189<0xbd>          "OP_UNKNOWN189"
    opcode OpUnknown190<0xbe>          "OP_UNKNOWN190"
    opcode OpUnknown191<0xbf>          "OP_UNKNOWN191"
    opcode OpUnknown192<0xc0>          "OP_UNKNOWN192"
    opcode OpUnknown193<0xc1>          "OP_UNKNOWN193"
    opcode OpUnknown194<0xc2>          "OP_UNKNOWN194"
    opcode OpUnknown195<0xc3>          "OP_UNKNOWN195"
    opcode OpUnknown196<0xc4>          "OP_UNKNOWN196"
    opcode OpUnknown197<0xc5>          "OP_UNKNOWN197"
    opcode OpUnknown198<0xc6>          "OP_UNKNOWN198"
    opcode OpUnknown199<0xc7>          "OP_UNKNOWN199"
    opcode OpUnknown200<0xc8>          "OP_UNKNOWN200"
    opcode OpUnknown201<0xc9>          "OP_UNKNOWN201"
    opcode OpUnknown202<0xca>          "OP_UNKNOWN202"
    opcode OpUnknown203<0xcb>          "OP_UNKNOWN203"
    opcode OpUnknown204<0xcc>          "OP_UNKNOWN204"
    opcode OpUnknown205<0xcd>          "OP_UNKNOWN205"
    opcode OpUnknown206<0xce>          "OP_UNKNOWN206"
    opcode OpUnknown207<0xcf>          "OP_UNKNOWN207"
    opcode OpUnknown208<0xd0>          "OP_UNKNOWN208"
    opcode OpUnknown209<0xd1>          "OP_UNKNOWN209"
    opcode OpUnknown210<0xd2>          "OP_UNKNOWN210"
    opcode OpUnknown211<0xd3>          "OP_UNKNOWN211"
    opcode OpUnknown212<0xd4>          "OP_UNKNOWN212"
    opcode OpUnknown213<0xd5>          "OP_UNKNOWN213"
    opcode OpUnknown214<0xd6>          "OP_UNKNOWN214"
    opcode OpUnknown215<0xd7>          "OP_UNKNOWN215"
    opcode OpUnknown216<0xd8>          "OP_UNKNOWN216"
    opcode OpUnknown217<0xd9>          "OP_UNKNOWN217"
    opcode OpUnknown218<0xda>          "OP_UNKNOWN218"
    opcode OpUnknown219<0xdb>          "OP_UNKNOWN219"
    opcode OpUnknown220<0xdc>          "OP_UNKNOWN220"
    opcode OpUnknown221<0xdd>          "OP_UNKNOWN221"
    opcode OpUnknown222<0xde>          "OP_UNKNOWN222"
    opcode OpUnknown223<0xdf>          "OP_UNKNOWN223"
    opcode OpUnknown224<0xe0>          "OP_UNKNOWN224"
    opcode OpUnknown225<0xe1>          "OP_UNKNOWN225"
    opcode OpUnknown226<0xe2>          "OP_UNKNOWN226"
    opcode OpUnknown227<0xe3>          "OP_UNKNOWN227"
    opcode OpUnknown228<0xe4>          "OP_UNKNOWN228"
    opcode OpUnknown229<0xe5>          "OP_UNKNOWN229"
    opcode OpUnknown230<0xe6>          "OP_UNKNOWN230"
    opcode OpUnknown231<0xe7>          "OP_UNKNOWN231"
    opcode OpUnknown232<0xe8>          "OP_UNKNOWN232"
    opcode OpUnknown233<0xe9>          "OP_UNKNOWN233"
    opcode OpUnknown234<0xea>          "OP_UNKNOWN234"
    opcode OpUnknown235<0xeb>          "OP_UNKNOWN235"
    opcode OpUnknown236<0xec>          "OP_UNKNOWN236"
    opcode OpUnknown237<0xed>          "OP_UNKNOWN237"
    opcode OpUnknown238<0xee>          "OP_UNKNOWN238"
    opcode OpUnknown239<0xef>          "OP_UNKNOWN239"
    opcode OpUnknown240<0xf0>          "OP_UNKNOWN240"
    opcode OpUnknown241<0xf1>          "OP_UNKNOWN241"
    opcode OpUnknown242<0xf2>          "OP_UNKNOWN242"
    opcode OpUnknown243<0xf3>          "OP_UNKNOWN243"
    opcode OpUnknown244<0xf4>          "OP_UNKNOWN244"
    opcode OpUnknown245<0xf5>          "OP_UNKNOWN245"
    opcode OpUnknown246<0xf6>          "OP_UNKNOWN246"
    opcode OpUnknown247<0xf7>          "OP_UNKNOWN247"
    opcode OpUnknown248<0xf8>          "OP_UNKNOWN248"
    opcode OpUnknown249<0xf9>          "OP_UNKNOWN249"
    opcode OpUnknown250<0xfa>          "OP_UNKNOWN250"
    opcode OpUnknown251<0xfb>          "OP_UNKNOWN251"
    opcode OpUnknown252<0xfc>          "OP_UNKNOWN252"
    opcode OpPubKeyHash<0xfd>          "OP_PUBKEYHASH"
    opcode OpPubKey<0xfe>              "OP_PUBKEY"
    opcode OpInvalidOpCode<0xff>       "OP_INVALIDOPCODE"

    alias OpFalse = Op0 "OP_FALSE"
    alias OpTrue = Op1 "OP_TRUE"
    alias OpNop2 = OpCheckLockTimeVerify "OP_NOP2"
    alias OpNop3 = OpCheckSequenceVerify "OP_NOP3"
}

/// Returns the canonical name of `opcode`.
pub fn opcode_name(opcode: u8) -> &'static str {
    OPCODE_NAMES[opcode as usize]
}

/// Returns true for Op0 and Op1..=Op16, the opcodes pushing a small integer.
pub fn is_small_int_op(opcode: u8) -> bool {
    opcode == codes::Op0 || (codes::Op1..=codes::Op16).contains(&opcode)
}

/// Returns true for opcodes carrying inline data (OpData1..=OpPushData4).
pub fn is_push_data_op(opcode: u8) -> bool {
    (codes::OpData1..=codes::OpPushData4).contains(&opcode)
}

/// Converts a small integer opcode to the integer it pushes. Any other
/// opcode yields 0.
pub fn to_small_int(opcode: u8) -> u8 {
    if is_small_int_op(opcode) && opcode != codes::Op0 {
        opcode - OP_INT_BASE
    } else {
        0
    }
}

/// Returns the opcode pushing the integer `value`, if it has one.
pub fn small_int_op(value: u8) -> Option<u8> {
    match value {
        0 => Some(codes::Op0),
        OP_SMALL_INT_MIN_VAL..=OP_SMALL_INT_MAX_VAL => Some(OP_INT_BASE + value),
        _ => None,
    }
}
