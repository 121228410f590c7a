use vergen::EmitBuilder;

fn main() {
    // 生成构建信息（版本、git 提交），供 build_info() 使用
    let emitted = EmitBuilder::builder().all_build().all_git().emit();
    if emitted.is_err() {
        // 非 git 环境（例如从源码包构建）下也要能编译
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}
