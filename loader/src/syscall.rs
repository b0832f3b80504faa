//! Raw syscall trampolines.
//!
//! One function per argument count, one set per architecture, each placing
//! its arguments into the registers of that architecture's raw kernel-entry
//! convention and executing the trap instruction. A `syscallN` binds only
//! the registers for its N arguments; unused argument registers are neither
//! read nor written, so the generated code stays minimal.

use core::arch::asm;

// ============================================================================
// x86_64: args in rdi, rsi, rdx, r10, r8, r9; number in rax; `syscall`
// clobbers rcx and r11.
// ============================================================================

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall0(num: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall1(num: usize, a0: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") a0,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall2(num: usize, a0: usize, a1: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") a0,
            in("rsi") a1,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall3(num: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall4(num: usize, a0: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            in("r10") a3,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall5(num: usize, a0: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            in("r10") a3,
            in("r8") a4,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn syscall6(
    num: usize,
    a0: usize,
    a1: usize,
    a2: usize,
    a3: usize,
    a4: usize,
    a5: usize,
) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") num => ret,
            in("rdi") a0,
            in("rsi") a1,
            in("rdx") a2,
            in("r10") a3,
            in("r8") a4,
            in("r9") a5,
            out("rcx") _,
            out("r11") _,
        );
    }
    ret
}

// ============================================================================
// x86: args in ebx, ecx, edx, esi, edi, ebp; number in eax; `int 0x80`.
// ebx and ebp are reserved by the compiler, so they are staged through
// scratch registers and the stack inside the asm block.
// ============================================================================

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall0(num: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "int 0x80",
            inlateout("eax") num => ret,
        );
    }
    ret
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall1(num: usize, a0: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "xchg ebx, {a0}",
            "int 0x80",
            "xchg ebx, {a0}",
            a0 = inout(reg) a0 => _,
            inlateout("eax") num => ret,
        );
    }
    ret
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall2(num: usize, a0: usize, a1: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "xchg ebx, {a0}",
            "int 0x80",
            "xchg ebx, {a0}",
            a0 = inout(reg) a0 => _,
            inlateout("eax") num => ret,
            in("ecx") a1,
        );
    }
    ret
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall3(num: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "xchg ebx, {a0}",
            "int 0x80",
            "xchg ebx, {a0}",
            a0 = inout(reg) a0 => _,
            inlateout("eax") num => ret,
            in("ecx") a1,
            in("edx") a2,
        );
    }
    ret
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall4(num: usize, a0: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "xchg ebx, {a0}",
            "int 0x80",
            "xchg ebx, {a0}",
            a0 = inout(reg) a0 => _,
            inlateout("eax") num => ret,
            in("ecx") a1,
            in("edx") a2,
            in("esi") a3,
        );
    }
    ret
}

// With ecx, edx, esi and edi pinned and ebx/ebp unavailable as operands,
// the five- and six-argument forms have no scratch register left; the
// remaining values are staged through a small array addressed via eax.

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall5(num: usize, a0: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> isize {
    let args = [a0, num];
    let ret: isize;
    unsafe {
        asm!(
            "push ebx",
            "mov ebx, [eax]",
            "mov eax, [eax + 4]",
            "int 0x80",
            "pop ebx",
            inlateout("eax") args.as_ptr() => ret,
            in("ecx") a1,
            in("edx") a2,
            in("esi") a3,
            in("edi") a4,
        );
    }
    ret
}

#[cfg(target_arch = "x86")]
#[inline(always)]
pub fn syscall6(
    num: usize,
    a0: usize,
    a1: usize,
    a2: usize,
    a3: usize,
    a4: usize,
    a5: usize,
) -> isize {
    let args = [a0, a5, num];
    let ret: isize;
    unsafe {
        asm!(
            "push ebp",
            "push ebx",
            "mov ebx, [eax]",
            "mov ebp, [eax + 4]",
            "mov eax, [eax + 8]",
            "int 0x80",
            "pop ebx",
            "pop ebp",
            inlateout("eax") args.as_ptr() => ret,
            in("ecx") a1,
            in("edx") a2,
            in("esi") a3,
            in("edi") a4,
        );
    }
    ret
}

// ============================================================================
// aarch64: args in x0..x5; number in x8; `svc #0`.
// ============================================================================

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall0(num: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            lateout("x0") ret,
            in("x8") num,
        );
    }
    ret
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall1(num: usize, a0: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            inlateout("x0") a0 => ret,
            in("x8") num,
        );
    }
    ret
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall2(num: usize, a0: usize, a1: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x8") num,
        );
    }
    ret
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall3(num: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x2") a2,
            in("x8") num,
        );
    }
    ret
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall4(num: usize, a0: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x2") a2,
            in("x3") a3,
            in("x8") num,
        );
    }
    ret
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall5(num: usize, a0: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x2") a2,
            in("x3") a3,
            in("x4") a4,
            in("x8") num,
        );
    }
    ret
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn syscall6(
    num: usize,
    a0: usize,
    a1: usize,
    a2: usize,
    a3: usize,
    a4: usize,
    a5: usize,
) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "svc #0",
            inlateout("x0") a0 => ret,
            in("x1") a1,
            in("x2") a2,
            in("x3") a3,
            in("x4") a4,
            in("x5") a5,
            in("x8") num,
        );
    }
    ret
}

// ============================================================================
// arm (Thumb): args in r0..r5; number in r7; `swi #0`.
// r7 is the Thumb frame pointer and reserved by the compiler, so it is
// saved and restored around the trap inside the asm block. Full-ARM-mode
// frame-pointer conventions are not supported.
// ============================================================================

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall0(num: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            lateout("r0") ret,
        );
    }
    ret
}

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall1(num: usize, a0: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            inlateout("r0") a0 => ret,
        );
    }
    ret
}

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall2(num: usize, a0: usize, a1: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            inlateout("r0") a0 => ret,
            in("r1") a1,
        );
    }
    ret
}

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall3(num: usize, a0: usize, a1: usize, a2: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            inlateout("r0") a0 => ret,
            in("r1") a1,
            in("r2") a2,
        );
    }
    ret
}

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall4(num: usize, a0: usize, a1: usize, a2: usize, a3: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            inlateout("r0") a0 => ret,
            in("r1") a1,
            in("r2") a2,
            in("r3") a3,
        );
    }
    ret
}

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall5(num: usize, a0: usize, a1: usize, a2: usize, a3: usize, a4: usize) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            inlateout("r0") a0 => ret,
            in("r1") a1,
            in("r2") a2,
            in("r3") a3,
            in("r4") a4,
        );
    }
    ret
}

#[cfg(target_arch = "arm")]
#[inline(always)]
pub fn syscall6(
    num: usize,
    a0: usize,
    a1: usize,
    a2: usize,
    a3: usize,
    a4: usize,
    a5: usize,
) -> isize {
    let ret: isize;
    unsafe {
        asm!(
            "mov {tmp}, r7",
            "mov r7, {num}",
            "swi #0",
            "mov r7, {tmp}",
            tmp = out(reg) _,
            num = in(reg) num,
            inlateout("r0") a0 => ret,
            in("r1") a1,
            in("r2") a2,
            in("r3") a3,
            in("r4") a4,
            in("r5") a5,
        );
    }
    ret
}
