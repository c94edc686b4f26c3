use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// One instruction set extension and the mnemonics counted for it.
pub struct SimdExtension {
    pub name: &'static str,
    pub description: &'static str,
    pub mnemonics: &'static [&'static str],
}

// AVX-512 is left out: the Kyber reference code never emits it.
pub static SIMD_EXTENSIONS: &[SimdExtension] = &[
    SimdExtension {
        name: "MMX",
        description: "MultiMedia eXtensions",
        mnemonics: &[
            "packsswb", "packssdw", "packuswb", "paddb", "paddw", "paddd", "paddsb", "paddsw",
            "paddusb", "paddusw", "pand", "pandn", "pcmpeqb", "pcmpeqw", "pcmpeqd", "pcmpgtb",
            "pcmpgtw", "pcmpgtd", "pmaddwd", "pmulhw", "pmullw", "por", "psllw", "pslld", "psllq",
            "psraw", "psrad", "psrlw", "psrld", "psrlq", "psubb", "psubw", "psubd", "psubsb",
            "psubsw", "psubusb", "psubusw", "punpckhbw", "punpckhwd", "punpckhdq", "punpcklbw",
            "punpcklwd", "punpckldq", "pxor",
        ],
    },
    SimdExtension {
        name: "SSE",
        description: "Streaming SIMD Extensions",
        mnemonics: &[
            "addps", "addss", "andps", "andnps", "cmpeqps", "cmpeqss", "cmpgeps", "cmpgess",
            "cmpgtps", "cmpgtss", "cmpleps", "cmpless", "cmpltps", "cmpltss", "cmpneqps",
            "cmpneqss", "cmpngeps", "cmpngess", "cmpngtps", "cmpngtss", "cmpnleps", "cmpnless",
            "cmpnltps", "cmpnltss", "cmpordps", "cmpordss", "cmpunordps", "cmpunordss", "divps",
            "divss", "maxps", "maxss", "minps", "minss", "movaps", "movss", "movups", "mulps",
            "mulss", "rcpps", "rcpss", "rsqrtps", "rsqrtss", "sqrtps", "sqrtss", "subps", "subss",
            "xorps",
        ],
    },
    SimdExtension {
        name: "SSE2",
        description: "Streaming SIMD Extensions 2",
        mnemonics: &[
            "addpd", "addsd", "andpd", "andnpd", "cmpeqpd", "cmpeqsd", "cmpgepd", "cmpgesd",
            "cmpgtpd", "cmpgtsd", "cmplepd", "cmplesd", "cmpltpd", "cmpltsd", "cmpneqpd",
            "cmpneqsd", "cmpngepd", "cmpngesd", "cmpngtpd", "cmpngtsd", "cmpnlepd", "cmpnlesd",
            "cmpnltpd", "cmpnltsd", "cmpordpd", "cmpordsd", "cmpunordpd", "cmpunordsd", "divpd",
            "divsd", "maxpd", "maxsd", "minpd", "minsd", "movapd", "movsd", "movupd", "mulpd",
            "mulsd", "sqrtpd", "subpd", "subsd", "xorpd",
        ],
    },
    SimdExtension {
        name: "SSE3",
        description: "Streaming SIMD Extensions 3",
        mnemonics: &[
            "addsubpd", "addsubps", "haddpd", "haddps", "hsubpd", "hsubps", "lddqu", "monitor",
            "mwait", "movddup", "movshdup", "movsldup",
        ],
    },
    SimdExtension {
        name: "SSSE3",
        description: "Supplemental Streaming SIMD Extensions 3",
        mnemonics: &[
            "pshufb", "phaddw", "phaddd", "phaddsw", "pmaddubsw", "phsubw", "phsubd", "phsubsw",
            "psignb", "psignw", "psignd", "pmulhrsw", "palignr",
        ],
    },
    SimdExtension {
        name: "SSE4.1",
        description: "Streaming SIMD Extensions 4.1",
        mnemonics: &[
            "blendpd", "blendps", "blendvpd", "blendvps", "dppd", "dpps", "extractps", "insertps",
            "movntdqa", "mpsadbw", "packusdw", "pblendvb", "pblendw", "pcmpeqq", "pextrb",
            "pextrd", "pextrq", "phminposuw", "pinsrb", "pinsrd", "pinsrq", "pmuldq", "pmulld",
            "ptest", "roundpd", "roundps", "roundsd", "roundss",
        ],
    },
    SimdExtension {
        name: "SSE4.2",
        description: "Streaming SIMD Extensions 4.2",
        // `crc32` can never be extracted (digits end the token) but stays listed.
        mnemonics: &[
            "pcmpestri", "pcmpestrm", "pcmpistri", "pcmpistrm", "crc32", "popcnt",
        ],
    },
    SimdExtension {
        name: "AVX",
        description: "Advanced Vector Extensions",
        mnemonics: &[
            "vaddpd", "vaddps", "vaddsd", "vaddss", "vandpd", "vandps", "vandnpd", "vandnps",
            "vdivpd", "vdivps", "vdivsd", "vdivss", "vmaxpd", "vmaxps", "vmaxsd", "vmaxss",
            "vminpd", "vminps", "vminsd", "vminss", "vmulpd", "vmulps", "vmulsd", "vmulss",
            "vorpd", "vorps", "vsqrtpd", "vsqrtps", "vsqrtsd", "vsqrtss", "vsubpd", "vsubps",
            "vsubsd", "vsubss", "vxorpd", "vxorps",
        ],
    },
    SimdExtension {
        name: "AVX2",
        description: "Advanced Vector Extensions 2",
        mnemonics: &[
            "vpabsb", "vpabsw", "vpabsd", "vpaddb", "vpaddw", "vpaddd", "vpaddq", "vpaddsb",
            "vpaddsw", "vpaddusb", "vpaddusw", "vpalignr", "vpand", "vpandn", "vpavgb", "vpavgw",
            "vpblendd", "vpcmpeqb", "vpcmpeqw", "vpcmpeqd", "vpcmpeqq", "vpcmpgtb", "vpcmpgtw",
            "vpcmpgtd",
        ],
    },
];

/// Flattened lookup set over [`SIMD_EXTENSIONS`].
pub fn simd_instructions() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        SIMD_EXTENSIONS
            .iter()
            .flat_map(|ext| ext.mnemonics.iter().copied())
            .collect()
    })
}

pub fn is_simd(mnemonic: &str) -> bool {
    simd_instructions().contains(mnemonic)
}

/// Extension a mnemonic belongs to, if any.
pub fn extension_of(mnemonic: &str) -> Option<&'static SimdExtension> {
    SIMD_EXTENSIONS
        .iter()
        .find(|ext| ext.mnemonics.iter().any(|m| *m == mnemonic))
}

/// A run of two or more lowercase letters between ASCII word boundaries.
pub fn instruction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?-u:\b)[a-z]{2,}(?-u:\b)").expect("instruction pattern is valid")
    })
}
