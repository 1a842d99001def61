//! Binder: builds the scope tree, binding table, and syntax index in one pass
//!
//! The walk mirrors JavaScript scoping semantics: block-scoped `let`/`const`,
//! `var` hoisting to the nearest function-like scope, and per-construct
//! scopes for loops, switch, try/catch, and classes. While walking it records
//! the syntax nodes the mutability analysis inspects (declarations, patterns,
//! assignment targets, statement containers) and classifies every identifier
//! reference as read, write, or read-write.

use std::sync::OnceLock;

use regex::Regex;
use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    ArrowExpr, AssignOp, AssignTarget, AssignTargetPat, BlockStmt, CatchClause, Class, Decl,
    DefaultDecl, Expr, FnDecl, ForHead, ForInStmt, ForOfStmt, ForStmt, Module, ModuleDecl,
    ModuleItem, ObjectPatProp, Pat, PropName, SimpleAssignTarget, Stmt, SwitchStmt, TryStmt,
    VarDecl, VarDeclKind, VarDeclOrExpr, WhileStmt,
};

use super::bindings::{
    Access, BindingTable, DeclarationKind, Definition, Reference, UnresolvedReference,
};
use super::scope::{ScopeId, ScopeKind, ScopeTree};
use crate::parser::ParsedFile;
use crate::syntax::{BindingKeyword, NodeId, NodeKind, SyntaxIndex, TextRange};

/// Output of a binding pass over one file.
pub struct SemanticModel {
    pub scopes: ScopeTree,
    pub bindings: BindingTable,
    pub syntax: SyntaxIndex,
    pub unresolved: Vec<UnresolvedReference>,
}

pub struct Binder<'a> {
    file: &'a ParsedFile,
    scopes: ScopeTree,
    bindings: BindingTable,
    syntax: SyntaxIndex,
    unresolved: Vec<UnresolvedReference>,
    current_scope: Option<ScopeId>,
    node_stack: Vec<NodeId>,
}

impl<'a> Binder<'a> {
    pub fn bind(file: &'a ParsedFile, module: &Module) -> SemanticModel {
        let mut binder = Self {
            file,
            scopes: ScopeTree::new(),
            bindings: BindingTable::new(),
            syntax: SyntaxIndex::new(),
            unresolved: Vec::new(),
            current_scope: None,
            node_stack: Vec::new(),
        };

        binder.visit_module(module);
        binder.apply_exported_directives();

        SemanticModel {
            scopes: binder.scopes,
            bindings: binder.bindings,
            syntax: binder.syntax,
            unresolved: binder.unresolved,
        }
    }

    fn range(&self, span: Span) -> TextRange {
        self.file.range_of(span)
    }

    fn scope(&self) -> ScopeId {
        self.current_scope.expect("no current scope")
    }

    fn begin_node(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let parent = self.node_stack.last().copied();
        let id = self.syntax.insert(kind, self.range(span), parent);
        self.node_stack.push(id);
        id
    }

    fn end_node(&mut self) {
        self.node_stack.pop();
    }

    fn leaf_node(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let parent = self.node_stack.last().copied();
        self.syntax.insert(kind, self.range(span), parent)
    }

    fn reference(&mut self, name: &str, node: NodeId, access: Access) {
        let from_scope = self.scope();
        if let Some(id) = self.bindings.lookup(name, from_scope, &self.scopes) {
            self.bindings.add_reference(
                id,
                Reference {
                    node,
                    from_scope,
                    access,
                },
            );
        } else {
            self.unresolved.push(UnresolvedReference {
                name: name.to_string(),
                node,
                scope: from_scope,
            });
        }
    }

    fn declare(
        &mut self,
        name: &str,
        kind: DeclarationKind,
        name_node: NodeId,
        declaration: Option<NodeId>,
        exported: bool,
    ) {
        let scope = if kind == DeclarationKind::Var {
            self.find_hoisting_scope()
        } else {
            self.scope()
        };

        self.bindings.declare(
            name,
            scope,
            Definition {
                kind,
                name_node,
                declaration,
            },
            exported,
        );
    }

    fn find_hoisting_scope(&self) -> ScopeId {
        let current = self.scope();

        for scope in self.scopes.ancestors(current) {
            if scope.kind.is_var_boundary() {
                return scope.id;
            }
        }

        current
    }

    /// `/* exported a, b */` comments mark top-level bindings as used by
    /// code outside this file.
    fn apply_exported_directives(&mut self) {
        static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
        let directive = DIRECTIVE
            .get_or_init(|| Regex::new(r"/\*\s*exported\s+([^*]+)\*/").expect("valid regex"));

        let Some(root) = self.scopes.root() else {
            return;
        };

        for capture in directive.captures_iter(self.file.source()) {
            for name in capture[1].split(',') {
                let name = name.trim();
                if !name.is_empty() {
                    self.bindings.mark_exported(name, root);
                }
            }
        }
    }

    fn visit_module(&mut self, module: &Module) {
        let global = self
            .scopes
            .create_scope(ScopeKind::Global, None, self.range(module.span));
        self.current_scope = Some(global);
        self.begin_node(NodeKind::Program, module.span);

        for item in &module.body {
            self.visit_module_item(item);
        }

        self.end_node();
    }

    fn visit_module_item(&mut self, item: &ModuleItem) {
        match item {
            ModuleItem::ModuleDecl(decl) => self.visit_module_decl(decl),
            ModuleItem::Stmt(stmt) => self.visit_stmt(stmt),
        }
    }

    fn visit_module_decl(&mut self, decl: &ModuleDecl) {
        match decl {
            ModuleDecl::ExportDecl(export_decl) => {
                self.visit_decl(&export_decl.decl, true);
            }
            ModuleDecl::ExportDefaultDecl(export_default) => match &export_default.decl {
                DefaultDecl::Fn(fn_expr) => {
                    self.visit_function(&fn_expr.function);
                }
                DefaultDecl::Class(class_expr) => {
                    self.visit_class(&class_expr.class);
                }
                DefaultDecl::TsInterfaceDecl(_) => {}
            },
            ModuleDecl::ExportDefaultExpr(export_expr) => {
                self.visit_expr(&export_expr.expr);
            }
            ModuleDecl::Import(import) => {
                for specifier in &import.specifiers {
                    let local = match specifier {
                        swc_ecma_ast::ImportSpecifier::Named(named) => &named.local,
                        swc_ecma_ast::ImportSpecifier::Default(default) => &default.local,
                        swc_ecma_ast::ImportSpecifier::Namespace(ns) => &ns.local,
                    };
                    let node =
                        self.leaf_node(NodeKind::Identifier(local.sym.to_string()), local.span);
                    self.declare(&local.sym, DeclarationKind::Import, node, None, false);
                }
            }
            ModuleDecl::ExportNamed(named_export) => {
                // `export { foo }` marks the local binding as externally used.
                if named_export.src.is_none() {
                    for specifier in &named_export.specifiers {
                        if let swc_ecma_ast::ExportSpecifier::Named(named) = specifier {
                            if let swc_ecma_ast::ModuleExportName::Ident(ident) = &named.orig {
                                let node = self.leaf_node(
                                    NodeKind::Identifier(ident.sym.to_string()),
                                    ident.span,
                                );
                                self.reference(&ident.sym, node, Access::Read);
                                if let Some(id) =
                                    self.bindings.lookup(&ident.sym, self.scope(), &self.scopes)
                                {
                                    self.bindings.get_mut(id).exported = true;
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Decl(decl) => self.visit_decl(decl, false),
            Stmt::Block(block) => {
                self.begin_node(NodeKind::BlockStatement, block.span);
                let parent_scope = self.current_scope;
                let block_scope =
                    self.scopes
                        .create_scope(ScopeKind::Block, parent_scope, self.range(block.span));
                self.current_scope = Some(block_scope);

                for s in &block.stmts {
                    self.visit_stmt(s);
                }

                self.current_scope = parent_scope;
                self.end_node();
            }
            Stmt::Expr(expr_stmt) => {
                self.begin_node(NodeKind::ExpressionStatement, expr_stmt.span);
                self.visit_expr(&expr_stmt.expr);
                self.end_node();
            }
            Stmt::If(if_stmt) => {
                self.begin_node(NodeKind::OtherStatement, if_stmt.span);
                self.visit_expr(&if_stmt.test);
                self.visit_stmt(&if_stmt.cons);
                if let Some(alt) = &if_stmt.alt {
                    self.visit_stmt(alt);
                }
                self.end_node();
            }
            Stmt::For(for_stmt) => self.visit_for_stmt(for_stmt),
            Stmt::ForIn(for_in) => self.visit_for_in_stmt(for_in),
            Stmt::ForOf(for_of) => self.visit_for_of_stmt(for_of),
            Stmt::While(while_stmt) => self.visit_while_stmt(while_stmt),
            Stmt::DoWhile(do_while) => {
                self.begin_node(NodeKind::OtherStatement, do_while.span);
                self.visit_stmt(&do_while.body);
                self.visit_expr(&do_while.test);
                self.end_node();
            }
            Stmt::Switch(switch_stmt) => self.visit_switch_stmt(switch_stmt),
            Stmt::Try(try_stmt) => self.visit_try_stmt(try_stmt),
            Stmt::Return(ret) => {
                self.begin_node(NodeKind::OtherStatement, ret.span);
                if let Some(arg) = &ret.arg {
                    self.visit_expr(arg);
                }
                self.end_node();
            }
            Stmt::Throw(throw_stmt) => {
                self.begin_node(NodeKind::OtherStatement, throw_stmt.span);
                self.visit_expr(&throw_stmt.arg);
                self.end_node();
            }
            Stmt::Labeled(labeled) => {
                self.begin_node(NodeKind::OtherStatement, labeled.span);
                self.visit_stmt(&labeled.body);
                self.end_node();
            }
            Stmt::With(with_stmt) => {
                self.begin_node(NodeKind::OtherStatement, with_stmt.span);
                self.visit_expr(&with_stmt.obj);
                self.visit_stmt(&with_stmt.body);
                self.end_node();
            }
            _ => {}
        }
    }

    fn visit_decl(&mut self, decl: &Decl, is_exported: bool) {
        match decl {
            Decl::Var(var_decl) => self.visit_var_decl(var_decl, is_exported, false),
            Decl::Fn(fn_decl) => self.visit_fn_decl(fn_decl, is_exported),
            Decl::Class(class_decl) => {
                let ident = &class_decl.ident;
                let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                self.declare(&ident.sym, DeclarationKind::Class, node, None, is_exported);
                self.visit_class(&class_decl.class);
            }
            Decl::Using(using) => {
                for declarator in &using.decls {
                    self.declare_pat(&declarator.name, DeclarationKind::Const, None, false, false);
                    if let Some(init) = &declarator.init {
                        self.visit_expr(init);
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_fn_decl(&mut self, fn_decl: &FnDecl, is_exported: bool) {
        let ident = &fn_decl.ident;
        let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
        self.declare(&ident.sym, DeclarationKind::Function, node, None, is_exported);
        self.visit_function(&fn_decl.function);
    }

    fn binding_keyword(kind: VarDeclKind) -> BindingKeyword {
        match kind {
            VarDeclKind::Var => BindingKeyword::Var,
            VarDeclKind::Let => BindingKeyword::Let,
            VarDeclKind::Const => BindingKeyword::Const,
        }
    }

    fn declaration_kind(kind: VarDeclKind) -> DeclarationKind {
        match kind {
            VarDeclKind::Var => DeclarationKind::Var,
            VarDeclKind::Let => DeclarationKind::Let,
            VarDeclKind::Const => DeclarationKind::Const,
        }
    }

    /// `in_loop_head` marks for-in/for-of heads, whose bindings are written
    /// on every iteration even without an initializer.
    fn visit_var_decl(&mut self, var_decl: &VarDecl, is_exported: bool, in_loop_head: bool) {
        let keyword = Self::binding_keyword(var_decl.kind);
        let decl_kind = Self::declaration_kind(var_decl.kind);
        let decl_node = self.begin_node(NodeKind::VariableDeclaration { keyword }, var_decl.span);

        for declarator in &var_decl.decls {
            let has_init = declarator.init.is_some();
            self.begin_node(NodeKind::VariableDeclarator { has_init }, declarator.span);
            self.declare_pat(
                &declarator.name,
                decl_kind,
                Some(decl_node),
                is_exported,
                has_init || in_loop_head,
            );
            if let Some(init) = &declarator.init {
                self.visit_expr(init);
            }
            self.end_node();
        }

        self.end_node();
    }

    /// Declare every binding in a declaration pattern, recording its syntax
    /// nodes. When `writes` is set, each declared identifier also receives a
    /// write reference (the binding is initialized at this point).
    fn declare_pat(
        &mut self,
        pat: &Pat,
        kind: DeclarationKind,
        declaration: Option<NodeId>,
        is_exported: bool,
        writes: bool,
    ) {
        match pat {
            Pat::Ident(binding_ident) => {
                let ident = &binding_ident.id;
                let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                self.declare(&ident.sym, kind, node, declaration, is_exported);
                if writes {
                    self.reference(&ident.sym, node, Access::Write);
                }
            }
            Pat::Array(array_pat) => {
                self.begin_node(
                    NodeKind::ArrayPattern {
                        elements: array_pat.elems.len(),
                    },
                    array_pat.span,
                );
                for elem in array_pat.elems.iter().flatten() {
                    self.declare_pat(elem, kind, declaration, is_exported, writes);
                }
                self.end_node();
            }
            Pat::Object(object_pat) => {
                self.begin_node(NodeKind::ObjectPattern, object_pat.span);
                for prop in &object_pat.props {
                    match prop {
                        ObjectPatProp::KeyValue(kv) => {
                            if let PropName::Computed(computed) = &kv.key {
                                self.visit_expr(&computed.expr);
                            }
                            self.begin_node(NodeKind::Property, kv.span());
                            self.declare_pat(&kv.value, kind, declaration, is_exported, writes);
                            self.end_node();
                        }
                        ObjectPatProp::Assign(assign) => {
                            self.begin_node(NodeKind::Property, assign.span);
                            let ident_span = assign.key.span;
                            let name = assign.key.sym.to_string();
                            if let Some(default) = &assign.value {
                                self.begin_node(NodeKind::AssignmentPattern, assign.span);
                                let node =
                                    self.leaf_node(NodeKind::Identifier(name.clone()), ident_span);
                                self.declare(&name, kind, node, declaration, is_exported);
                                if writes {
                                    self.reference(&name, node, Access::Write);
                                }
                                self.visit_expr(default);
                                self.end_node();
                            } else {
                                let node =
                                    self.leaf_node(NodeKind::Identifier(name.clone()), ident_span);
                                self.declare(&name, kind, node, declaration, is_exported);
                                if writes {
                                    self.reference(&name, node, Access::Write);
                                }
                            }
                            self.end_node();
                        }
                        ObjectPatProp::Rest(rest) => {
                            self.begin_node(NodeKind::RestElement, rest.span);
                            self.declare_pat(&rest.arg, kind, declaration, is_exported, writes);
                            self.end_node();
                        }
                    }
                }
                self.end_node();
            }
            Pat::Rest(rest_pat) => {
                self.begin_node(NodeKind::RestElement, rest_pat.span);
                self.declare_pat(&rest_pat.arg, kind, declaration, is_exported, writes);
                self.end_node();
            }
            Pat::Assign(assign_pat) => {
                self.begin_node(NodeKind::AssignmentPattern, assign_pat.span);
                self.declare_pat(&assign_pat.left, kind, declaration, is_exported, writes);
                self.visit_expr(&assign_pat.right);
                self.end_node();
            }
            Pat::Invalid(invalid) => {
                self.leaf_node(NodeKind::Unsupported, invalid.span);
            }
            Pat::Expr(expr) => {
                self.leaf_node(NodeKind::Unsupported, expr.span());
            }
        }
    }

    fn visit_for_stmt(&mut self, for_stmt: &ForStmt) {
        self.begin_node(NodeKind::ForStatement, for_stmt.span);
        let parent_scope = self.current_scope;
        let for_scope =
            self.scopes
                .create_scope(ScopeKind::For, parent_scope, self.range(for_stmt.span));
        self.current_scope = Some(for_scope);

        if let Some(init) = &for_stmt.init {
            match init {
                VarDeclOrExpr::VarDecl(var_decl) => self.visit_var_decl(var_decl, false, false),
                VarDeclOrExpr::Expr(expr) => self.visit_expr(expr),
            }
        }
        if let Some(test) = &for_stmt.test {
            self.visit_expr(test);
        }
        if let Some(update) = &for_stmt.update {
            self.visit_expr(update);
        }
        self.visit_stmt(&for_stmt.body);

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_for_in_stmt(&mut self, for_in: &ForInStmt) {
        self.begin_node(NodeKind::ForInStatement, for_in.span);
        let parent_scope = self.current_scope;
        let for_scope = self
            .scopes
            .create_scope(ScopeKind::For, parent_scope, self.range(for_in.span));
        self.current_scope = Some(for_scope);

        self.visit_for_head(&for_in.left);
        self.visit_expr(&for_in.right);
        self.visit_stmt(&for_in.body);

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_for_of_stmt(&mut self, for_of: &ForOfStmt) {
        self.begin_node(NodeKind::ForOfStatement, for_of.span);
        let parent_scope = self.current_scope;
        let for_scope = self
            .scopes
            .create_scope(ScopeKind::For, parent_scope, self.range(for_of.span));
        self.current_scope = Some(for_scope);

        self.visit_for_head(&for_of.left);
        self.visit_expr(&for_of.right);
        self.visit_stmt(&for_of.body);

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_for_head(&mut self, head: &ForHead) {
        match head {
            ForHead::VarDecl(var_decl) => self.visit_var_decl(var_decl, false, true),
            ForHead::Pat(pat) => self.record_assign_pat(pat),
            ForHead::UsingDecl(using) => {
                for declarator in &using.decls {
                    self.declare_pat(&declarator.name, DeclarationKind::Const, None, false, true);
                }
            }
        }
    }

    fn visit_while_stmt(&mut self, while_stmt: &WhileStmt) {
        self.begin_node(NodeKind::OtherStatement, while_stmt.span);
        let parent_scope = self.current_scope;
        let while_scope =
            self.scopes
                .create_scope(ScopeKind::While, parent_scope, self.range(while_stmt.span));
        self.current_scope = Some(while_scope);

        self.visit_expr(&while_stmt.test);
        self.visit_stmt(&while_stmt.body);

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_switch_stmt(&mut self, switch_stmt: &SwitchStmt) {
        self.begin_node(NodeKind::OtherStatement, switch_stmt.span);
        let parent_scope = self.current_scope;
        let switch_scope = self.scopes.create_scope(
            ScopeKind::Switch,
            parent_scope,
            self.range(switch_stmt.span),
        );
        self.current_scope = Some(switch_scope);

        self.visit_expr(&switch_stmt.discriminant);

        for case in &switch_stmt.cases {
            self.begin_node(NodeKind::SwitchCase, case.span);
            if let Some(test) = &case.test {
                self.visit_expr(test);
            }
            for s in &case.cons {
                self.visit_stmt(s);
            }
            self.end_node();
        }

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_try_stmt(&mut self, try_stmt: &TryStmt) {
        self.begin_node(NodeKind::OtherStatement, try_stmt.span);

        self.begin_node(NodeKind::BlockStatement, try_stmt.block.span);
        let parent_scope = self.current_scope;
        let try_scope = self.scopes.create_scope(
            ScopeKind::Try,
            parent_scope,
            self.range(try_stmt.block.span),
        );
        self.current_scope = Some(try_scope);
        for s in &try_stmt.block.stmts {
            self.visit_stmt(s);
        }
        self.current_scope = parent_scope;
        self.end_node();

        if let Some(handler) = &try_stmt.handler {
            self.visit_catch_clause(handler);
        }

        if let Some(finalizer) = &try_stmt.finalizer {
            self.begin_node(NodeKind::BlockStatement, finalizer.span);
            let finally_scope =
                self.scopes
                    .create_scope(ScopeKind::Block, parent_scope, self.range(finalizer.span));
            self.current_scope = Some(finally_scope);
            for s in &finalizer.stmts {
                self.visit_stmt(s);
            }
            self.current_scope = parent_scope;
            self.end_node();
        }

        self.end_node();
    }

    fn visit_catch_clause(&mut self, catch: &CatchClause) {
        let parent_scope = self.current_scope;
        let catch_scope =
            self.scopes
                .create_scope(ScopeKind::Catch, parent_scope, self.range(catch.span));
        self.current_scope = Some(catch_scope);

        if let Some(param) = &catch.param {
            self.declare_pat(param, DeclarationKind::CatchParam, None, false, false);
        }

        self.begin_node(NodeKind::BlockStatement, catch.body.span);
        for s in &catch.body.stmts {
            self.visit_stmt(s);
        }
        self.end_node();

        self.current_scope = parent_scope;
    }

    fn visit_function(&mut self, func: &swc_ecma_ast::Function) {
        let Some(body) = &func.body else {
            return;
        };

        self.begin_node(NodeKind::Unsupported, func.span);
        let parent_scope = self.current_scope;
        let func_scope =
            self.scopes
                .create_scope(ScopeKind::Function, parent_scope, self.range(body.span));
        self.current_scope = Some(func_scope);

        for param in &func.params {
            self.declare_pat(&param.pat, DeclarationKind::Parameter, None, false, false);
        }

        self.visit_function_body(body);

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_function_body(&mut self, body: &BlockStmt) {
        self.begin_node(NodeKind::BlockStatement, body.span);
        for stmt in &body.stmts {
            self.visit_stmt(stmt);
        }
        self.end_node();
    }

    fn visit_arrow_expr(&mut self, arrow: &ArrowExpr) {
        self.begin_node(NodeKind::Unsupported, arrow.span);
        let body_range = match &*arrow.body {
            swc_ecma_ast::BlockStmtOrExpr::BlockStmt(block) => self.range(block.span),
            swc_ecma_ast::BlockStmtOrExpr::Expr(expr) => self.range(expr.span()),
        };
        let parent_scope = self.current_scope;
        let arrow_scope =
            self.scopes
                .create_scope(ScopeKind::ArrowFunction, parent_scope, body_range);
        self.current_scope = Some(arrow_scope);

        for param in &arrow.params {
            self.declare_pat(param, DeclarationKind::Parameter, None, false, false);
        }

        match &*arrow.body {
            swc_ecma_ast::BlockStmtOrExpr::BlockStmt(block) => self.visit_function_body(block),
            swc_ecma_ast::BlockStmtOrExpr::Expr(expr) => self.visit_expr(expr),
        }

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_class(&mut self, class: &Class) {
        self.begin_node(NodeKind::Unsupported, class.span);

        if let Some(super_class) = &class.super_class {
            self.visit_expr(super_class);
        }

        let parent_scope = self.current_scope;
        let class_scope =
            self.scopes
                .create_scope(ScopeKind::Class, parent_scope, self.range(class.span));
        self.current_scope = Some(class_scope);

        for member in &class.body {
            match member {
                swc_ecma_ast::ClassMember::Method(method) => {
                    self.visit_function(&method.function);
                }
                swc_ecma_ast::ClassMember::PrivateMethod(method) => {
                    self.visit_function(&method.function);
                }
                swc_ecma_ast::ClassMember::Constructor(ctor) => {
                    let Some(body) = &ctor.body else {
                        continue;
                    };
                    let ctor_scope = self.scopes.create_scope(
                        ScopeKind::Function,
                        Some(class_scope),
                        self.range(ctor.span),
                    );
                    self.current_scope = Some(ctor_scope);

                    for param in &ctor.params {
                        if let swc_ecma_ast::ParamOrTsParamProp::Param(p) = param {
                            self.declare_pat(
                                &p.pat,
                                DeclarationKind::Parameter,
                                None,
                                false,
                                false,
                            );
                        }
                    }

                    self.visit_function_body(body);
                    self.current_scope = Some(class_scope);
                }
                swc_ecma_ast::ClassMember::ClassProp(prop) => {
                    if let Some(value) = &prop.value {
                        self.visit_expr(value);
                    }
                }
                swc_ecma_ast::ClassMember::PrivateProp(prop) => {
                    if let Some(value) = &prop.value {
                        self.visit_expr(value);
                    }
                }
                swc_ecma_ast::ClassMember::StaticBlock(block) => {
                    self.begin_node(NodeKind::StaticBlock, block.span);
                    let static_scope = self.scopes.create_scope(
                        ScopeKind::StaticBlock,
                        Some(class_scope),
                        self.range(block.body.span),
                    );
                    self.current_scope = Some(static_scope);
                    for stmt in &block.body.stmts {
                        self.visit_stmt(stmt);
                    }
                    self.current_scope = Some(class_scope);
                    self.end_node();
                }
                _ => {}
            }
        }

        self.current_scope = parent_scope;
        self.end_node();
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Ident(ident) => {
                let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                self.reference(&ident.sym, node, Access::Read);
            }
            Expr::Assign(assign) => {
                self.begin_node(NodeKind::AssignmentExpression, assign.span);
                let access = if assign.op == AssignOp::Assign {
                    Access::Write
                } else {
                    Access::ReadWrite
                };
                self.visit_assign_target(&assign.left, access);
                self.visit_expr(&assign.right);
                self.end_node();
            }
            Expr::Update(update) => {
                self.begin_node(NodeKind::Unsupported, update.span);
                if let Expr::Ident(ident) = &*update.arg {
                    let node =
                        self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                    self.reference(&ident.sym, node, Access::ReadWrite);
                } else {
                    self.visit_expr(&update.arg);
                }
                self.end_node();
            }
            Expr::Call(call) => {
                self.begin_node(
                    NodeKind::CallExpression {
                        callee: callee_path(&call.callee),
                    },
                    call.span,
                );
                if let swc_ecma_ast::Callee::Expr(callee) = &call.callee {
                    self.visit_expr(callee);
                }
                for arg in &call.args {
                    self.visit_expr(&arg.expr);
                }
                self.end_node();
            }
            Expr::New(new_expr) => {
                self.begin_node(NodeKind::Unsupported, new_expr.span);
                self.visit_expr(&new_expr.callee);
                if let Some(args) = &new_expr.args {
                    for arg in args {
                        self.visit_expr(&arg.expr);
                    }
                }
                self.end_node();
            }
            Expr::Member(member) => {
                self.record_member_target(member, false);
            }
            Expr::Array(array) => {
                for elem in array.elems.iter().flatten() {
                    self.visit_expr(&elem.expr);
                }
            }
            Expr::Object(obj) => {
                for prop in &obj.props {
                    match prop {
                        swc_ecma_ast::PropOrSpread::Spread(spread) => {
                            self.visit_expr(&spread.expr);
                        }
                        swc_ecma_ast::PropOrSpread::Prop(prop) => self.visit_prop(prop),
                    }
                }
            }
            Expr::Cond(cond) => {
                self.visit_expr(&cond.test);
                self.visit_expr(&cond.cons);
                self.visit_expr(&cond.alt);
            }
            Expr::Bin(bin) => {
                self.visit_expr(&bin.left);
                self.visit_expr(&bin.right);
            }
            Expr::Unary(unary) => {
                self.visit_expr(&unary.arg);
            }
            Expr::Seq(seq) => {
                for e in &seq.exprs {
                    self.visit_expr(e);
                }
            }
            Expr::Paren(paren) => {
                self.visit_expr(&paren.expr);
            }
            Expr::Arrow(arrow) => self.visit_arrow_expr(arrow),
            Expr::Fn(fn_expr) => {
                // Function expression names are only visible inside the body;
                // they are not bindings in the enclosing scope.
                self.visit_function(&fn_expr.function);
            }
            Expr::Class(class_expr) => {
                self.visit_class(&class_expr.class);
            }
            Expr::Tpl(tpl) => {
                for e in &tpl.exprs {
                    self.visit_expr(e);
                }
            }
            Expr::TaggedTpl(tagged) => {
                self.visit_expr(&tagged.tag);
                for e in &tagged.tpl.exprs {
                    self.visit_expr(e);
                }
            }
            Expr::Await(await_expr) => {
                self.visit_expr(&await_expr.arg);
            }
            Expr::Yield(yield_expr) => {
                if let Some(arg) = &yield_expr.arg {
                    self.visit_expr(arg);
                }
            }
            Expr::OptChain(opt_chain) => match &*opt_chain.base {
                swc_ecma_ast::OptChainBase::Member(member) => {
                    self.visit_expr(&member.obj);
                    if let swc_ecma_ast::MemberProp::Computed(computed) = &member.prop {
                        self.visit_expr(&computed.expr);
                    }
                }
                swc_ecma_ast::OptChainBase::Call(call) => {
                    self.visit_expr(&call.callee);
                    for arg in &call.args {
                        self.visit_expr(&arg.expr);
                    }
                }
            },
            Expr::TsAs(ts_as) => self.visit_expr(&ts_as.expr),
            Expr::TsNonNull(non_null) => self.visit_expr(&non_null.expr),
            Expr::TsSatisfies(satisfies) => self.visit_expr(&satisfies.expr),
            Expr::TsConstAssertion(assertion) => self.visit_expr(&assertion.expr),
            Expr::TsTypeAssertion(assertion) => self.visit_expr(&assertion.expr),
            Expr::TsInstantiation(inst) => self.visit_expr(&inst.expr),
            Expr::JSXElement(element) => self.visit_jsx_element(element),
            Expr::JSXFragment(fragment) => {
                for child in &fragment.children {
                    self.visit_jsx_child(child);
                }
            }
            _ => {}
        }
    }

    fn visit_prop(&mut self, prop: &swc_ecma_ast::Prop) {
        match prop {
            swc_ecma_ast::Prop::Shorthand(ident) => {
                let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                self.reference(&ident.sym, node, Access::Read);
            }
            swc_ecma_ast::Prop::KeyValue(kv) => {
                if let PropName::Computed(computed) = &kv.key {
                    self.visit_expr(&computed.expr);
                }
                self.visit_expr(&kv.value);
            }
            swc_ecma_ast::Prop::Assign(assign) => {
                self.visit_expr(&assign.value);
            }
            swc_ecma_ast::Prop::Method(method) => {
                self.visit_function(&method.function);
            }
            swc_ecma_ast::Prop::Getter(getter) => {
                if let Some(body) = &getter.body {
                    let parent_scope = self.current_scope;
                    let scope = self.scopes.create_scope(
                        ScopeKind::Function,
                        parent_scope,
                        self.range(body.span),
                    );
                    self.current_scope = Some(scope);
                    self.visit_function_body(body);
                    self.current_scope = parent_scope;
                }
            }
            swc_ecma_ast::Prop::Setter(setter) => {
                if let Some(body) = &setter.body {
                    let parent_scope = self.current_scope;
                    let scope = self.scopes.create_scope(
                        ScopeKind::Function,
                        parent_scope,
                        self.range(body.span),
                    );
                    self.current_scope = Some(scope);
                    self.declare_pat(&setter.param, DeclarationKind::Parameter, None, false, false);
                    self.visit_function_body(body);
                    self.current_scope = parent_scope;
                }
            }
        }
    }

    fn visit_assign_target(&mut self, target: &AssignTarget, access: Access) {
        match target {
            AssignTarget::Simple(simple) => match simple {
                SimpleAssignTarget::Ident(binding_ident) => {
                    let ident = &binding_ident.id;
                    let node =
                        self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                    self.reference(&ident.sym, node, access);
                }
                SimpleAssignTarget::Member(member) => {
                    self.record_member_target(member, true);
                }
                _ => {
                    self.leaf_node(NodeKind::Unsupported, target.span());
                }
            },
            AssignTarget::Pat(pat) => match pat {
                AssignTargetPat::Array(array_pat) => {
                    self.record_array_target(array_pat);
                }
                AssignTargetPat::Object(object_pat) => {
                    self.record_object_target(object_pat);
                }
                AssignTargetPat::Invalid(invalid) => {
                    self.leaf_node(NodeKind::Unsupported, invalid.span);
                }
            },
        }
    }

    /// Member expressions get a node of their own so pattern validation can
    /// detect property-write targets; the object and computed key are reads.
    fn record_member_target(&mut self, member: &swc_ecma_ast::MemberExpr, _written: bool) {
        self.begin_node(NodeKind::MemberExpression, member.span);
        self.visit_expr(&member.obj);
        if let swc_ecma_ast::MemberProp::Computed(computed) = &member.prop {
            self.visit_expr(&computed.expr);
        }
        self.end_node();
    }

    /// Assignment-side destructuring: identifiers are write references into
    /// existing bindings rather than declarations.
    fn record_assign_pat(&mut self, pat: &Pat) {
        match pat {
            Pat::Ident(binding_ident) => {
                let ident = &binding_ident.id;
                let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                self.reference(&ident.sym, node, Access::Write);
            }
            Pat::Array(array_pat) => self.record_array_target(array_pat),
            Pat::Object(object_pat) => self.record_object_target(object_pat),
            Pat::Rest(rest_pat) => {
                self.begin_node(NodeKind::RestElement, rest_pat.span);
                self.record_assign_pat(&rest_pat.arg);
                self.end_node();
            }
            Pat::Assign(assign_pat) => {
                self.begin_node(NodeKind::AssignmentPattern, assign_pat.span);
                self.record_assign_pat(&assign_pat.left);
                self.visit_expr(&assign_pat.right);
                self.end_node();
            }
            Pat::Expr(expr) => match &**expr {
                Expr::Member(member) => self.record_member_target(member, true),
                other => {
                    self.leaf_node(NodeKind::Unsupported, other.span());
                }
            },
            Pat::Invalid(invalid) => {
                self.leaf_node(NodeKind::Unsupported, invalid.span);
            }
        }
    }

    fn record_array_target(&mut self, array_pat: &swc_ecma_ast::ArrayPat) {
        self.begin_node(
            NodeKind::ArrayPattern {
                elements: array_pat.elems.len(),
            },
            array_pat.span,
        );
        for elem in array_pat.elems.iter().flatten() {
            self.record_assign_pat(elem);
        }
        self.end_node();
    }

    fn record_object_target(&mut self, object_pat: &swc_ecma_ast::ObjectPat) {
        self.begin_node(NodeKind::ObjectPattern, object_pat.span);
        for prop in &object_pat.props {
            match prop {
                ObjectPatProp::KeyValue(kv) => {
                    if let PropName::Computed(computed) = &kv.key {
                        self.visit_expr(&computed.expr);
                    }
                    self.begin_node(NodeKind::Property, kv.span());
                    self.record_assign_pat(&kv.value);
                    self.end_node();
                }
                ObjectPatProp::Assign(assign) => {
                    self.begin_node(NodeKind::Property, assign.span);
                    let name = assign.key.sym.to_string();
                    let ident_span = assign.key.span;
                    if let Some(default) = &assign.value {
                        self.begin_node(NodeKind::AssignmentPattern, assign.span);
                        let node = self.leaf_node(NodeKind::Identifier(name.clone()), ident_span);
                        self.reference(&name, node, Access::Write);
                        self.visit_expr(default);
                        self.end_node();
                    } else {
                        let node = self.leaf_node(NodeKind::Identifier(name.clone()), ident_span);
                        self.reference(&name, node, Access::Write);
                    }
                    self.end_node();
                }
                ObjectPatProp::Rest(rest) => {
                    self.begin_node(NodeKind::RestElement, rest.span);
                    self.record_assign_pat(&rest.arg);
                    self.end_node();
                }
            }
        }
        self.end_node();
    }

    fn visit_jsx_element(&mut self, element: &swc_ecma_ast::JSXElement) {
        if let swc_ecma_ast::JSXElementName::Ident(ident) = &element.opening.name {
            // Component references start uppercase; plain tags are not
            // identifiers in scope.
            if ident.sym.chars().next().is_some_and(|c| c.is_uppercase()) {
                let node = self.leaf_node(NodeKind::Identifier(ident.sym.to_string()), ident.span);
                self.reference(&ident.sym, node, Access::Read);
            }
        }

        for attr in &element.opening.attrs {
            match attr {
                swc_ecma_ast::JSXAttrOrSpread::JSXAttr(attr) => {
                    if let Some(swc_ecma_ast::JSXAttrValue::JSXExprContainer(container)) =
                        &attr.value
                    {
                        if let swc_ecma_ast::JSXExpr::Expr(expr) = &container.expr {
                            self.visit_expr(expr);
                        }
                    }
                }
                swc_ecma_ast::JSXAttrOrSpread::SpreadElement(spread) => {
                    self.visit_expr(&spread.expr);
                }
            }
        }

        for child in &element.children {
            self.visit_jsx_child(child);
        }
    }

    fn visit_jsx_child(&mut self, child: &swc_ecma_ast::JSXElementChild) {
        match child {
            swc_ecma_ast::JSXElementChild::JSXExprContainer(container) => {
                if let swc_ecma_ast::JSXExpr::Expr(expr) = &container.expr {
                    self.visit_expr(expr);
                }
            }
            swc_ecma_ast::JSXElementChild::JSXSpreadChild(spread) => {
                self.visit_expr(&spread.expr);
            }
            swc_ecma_ast::JSXElementChild::JSXElement(element) => {
                self.visit_jsx_element(element);
            }
            swc_ecma_ast::JSXElementChild::JSXFragment(fragment) => {
                for child in &fragment.children {
                    self.visit_jsx_child(child);
                }
            }
            swc_ecma_ast::JSXElementChild::JSXText(_) => {}
        }
    }
}

/// Render a simple callee as a dotted path (`foo`, `Object.freeze`).
/// Computed access and anything non-trivial yields `None`.
fn callee_path(callee: &swc_ecma_ast::Callee) -> Option<String> {
    let swc_ecma_ast::Callee::Expr(expr) = callee else {
        return None;
    };
    expr_path(expr)
}

fn expr_path(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => {
            let obj = expr_path(&member.obj)?;
            match &member.prop {
                swc_ecma_ast::MemberProp::Ident(prop) => Some(format!("{}.{}", obj, prop.sym)),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::scope::ScopeKind;

    fn bind_source(code: &str) -> (ParsedFile, SemanticModel) {
        let parsed = ParsedFile::from_source("test.js", code);
        let model = {
            let module = parsed.module().expect("parse failed");
            Binder::bind(&parsed, module)
        };
        (parsed, model)
    }

    fn variable<'m>(
        model: &'m SemanticModel,
        name: &str,
    ) -> &'m crate::semantic::bindings::Variable {
        model
            .bindings
            .variables()
            .find(|v| v.name == name)
            .unwrap_or_else(|| panic!("variable '{}' not found", name))
    }

    #[test]
    fn creates_global_scope() {
        let (_, model) = bind_source("");
        let root = model.scopes.root().expect("no root scope");
        assert_eq!(model.scopes.get(root).kind, ScopeKind::Global);
    }

    #[test]
    fn let_with_initializer_gets_write_reference() {
        let (_, model) = bind_source("let x = 1;");
        let x = variable(&model, "x");

        assert_eq!(x.declaration_kind(), Some(DeclarationKind::Let));
        assert_eq!(x.references.len(), 1);
        assert!(x.references[0].access.is_write());
        assert_eq!(x.references[0].from_scope, x.scope);
    }

    #[test]
    fn uninitialized_let_has_no_references() {
        let (_, model) = bind_source("let x;");
        let x = variable(&model, "x");

        assert!(x.references.is_empty());
    }

    #[test]
    fn reads_are_classified_after_writes() {
        let (_, model) = bind_source("let x = 1; foo(x);");
        let x = variable(&model, "x");

        assert_eq!(x.references.len(), 2);
        assert!(x.references[0].access.is_write());
        assert_eq!(x.references[1].access, Access::Read);
    }

    #[test]
    fn assignment_is_a_write_from_its_own_scope() {
        let (_, model) = bind_source("let x; { x = 1; }");
        let x = variable(&model, "x");

        assert_eq!(x.references.len(), 1);
        assert_eq!(x.references[0].access, Access::Write);
        assert_ne!(x.references[0].from_scope, x.scope);
    }

    #[test]
    fn compound_assignment_and_update_are_read_write() {
        let (_, model) = bind_source("let x = 0; x += 1; x++;");
        let x = variable(&model, "x");

        assert_eq!(x.references.len(), 3);
        assert_eq!(x.references[1].access, Access::ReadWrite);
        assert_eq!(x.references[2].access, Access::ReadWrite);
    }

    #[test]
    fn var_hoists_to_function_scope() {
        let (_, model) = bind_source("function f() { { var x = 1; } }");
        let x = variable(&model, "x");

        assert_eq!(model.scopes.get(x.scope).kind, ScopeKind::Function);
    }

    #[test]
    fn let_stays_block_scoped() {
        let (_, model) = bind_source("function f() { { let x = 1; } }");
        let x = variable(&model, "x");

        assert_eq!(model.scopes.get(x.scope).kind, ScopeKind::Block);
    }

    #[test]
    fn shadowed_names_resolve_to_nearest_binding() {
        let (_, model) = bind_source("let x = 1; function f() { let x = 2; x = 3; }");
        let vars: Vec<_> = model
            .bindings
            .variables()
            .filter(|v| v.name == "x")
            .collect();

        assert_eq!(vars.len(), 2);
        let outer = vars.iter().find(|v| {
            matches!(model.scopes.get(v.scope).kind, ScopeKind::Global)
        });
        let inner = vars.iter().find(|v| {
            matches!(model.scopes.get(v.scope).kind, ScopeKind::Function)
        });
        assert_eq!(outer.expect("outer x").references.len(), 1);
        assert_eq!(inner.expect("inner x").references.len(), 2);
    }

    #[test]
    fn destructuring_declaration_writes_each_member() {
        let (_, model) = bind_source("let { a, b: c, ...rest } = obj;");

        for name in ["a", "c", "rest"] {
            let v = variable(&model, name);
            assert_eq!(v.references.len(), 1, "{name}");
            assert!(v.references[0].access.is_write(), "{name}");
        }
    }

    #[test]
    fn destructuring_assignment_writes_existing_bindings() {
        let (_, model) = bind_source("let a; let b; ({ a, b } = obj);");

        for name in ["a", "b"] {
            let v = variable(&model, name);
            assert_eq!(v.references.len(), 1, "{name}");
            assert_eq!(v.references[0].access, Access::Write, "{name}");
        }
    }

    #[test]
    fn for_of_head_binding_is_written() {
        let (_, model) = bind_source("for (let item of list) { use(item); }");
        let item = variable(&model, "item");

        assert_eq!(model.scopes.get(item.scope).kind, ScopeKind::For);
        assert!(item.references[0].access.is_write());
        assert_eq!(item.references[0].from_scope, item.scope);
    }

    #[test]
    fn export_declaration_marks_variable_exported() {
        let (_, model) = bind_source("export let config = {};");
        assert!(variable(&model, "config").exported);
    }

    #[test]
    fn named_export_marks_variable_exported() {
        let (_, model) = bind_source("let a = 1; export { a };");
        assert!(variable(&model, "a").exported);
    }

    #[test]
    fn exported_directive_marks_global() {
        let (_, model) = bind_source("/* exported cache, registry */ let cache = 1;\nlet registry = 2;\nlet other = 3;");

        assert!(variable(&model, "cache").exported);
        assert!(variable(&model, "registry").exported);
        assert!(!variable(&model, "other").exported);
    }

    #[test]
    fn unresolved_references_are_collected() {
        let (_, model) = bind_source("foo(bar);");

        let names: Vec<_> = model.unresolved.iter().map(|u| u.name.as_str()).collect();
        assert!(names.contains(&"foo"));
        assert!(names.contains(&"bar"));
    }

    #[test]
    fn declarator_identifier_chain_reaches_declaration() {
        let (_, model) = bind_source("let x = 1;");
        let x = variable(&model, "x");
        let ident = x.definitions[0].name_node;

        let kinds: Vec<_> = model
            .syntax
            .ancestors(ident)
            .map(|n| n.kind.clone())
            .collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::VariableDeclarator { has_init: true },
                NodeKind::VariableDeclaration {
                    keyword: BindingKeyword::Let
                },
                NodeKind::Program,
            ]
        );
    }

    #[test]
    fn assignment_chain_reaches_expression_statement() {
        let (_, model) = bind_source("let x; x = 1;");
        let x = variable(&model, "x");
        let write = x.references[0].node;

        let kinds: Vec<_> = model
            .syntax
            .ancestors(write)
            .map(|n| n.kind.clone())
            .collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::AssignmentExpression,
                NodeKind::ExpressionStatement,
                NodeKind::Program,
            ]
        );
    }

    #[test]
    fn member_target_recorded_inside_assignment_pattern() {
        let (_, model) = bind_source("let a; [obj.prop, a] = pair();");
        let a = variable(&model, "a");
        let write = a.references[0].node;

        let pattern = model
            .syntax
            .ancestors(write)
            .find(|n| matches!(n.kind, NodeKind::ArrayPattern { .. }))
            .expect("array pattern ancestor");
        assert!(
            model
                .syntax
                .descendants(pattern.id)
                .any(|n| n.kind == NodeKind::MemberExpression)
        );
    }

    #[test]
    fn array_pattern_counts_holes() {
        let (_, model) = bind_source("let [a, , b] = list;");
        let a = variable(&model, "a");

        let pattern = model
            .syntax
            .ancestors(a.references[0].node)
            .find(|n| matches!(n.kind, NodeKind::ArrayPattern { .. }))
            .expect("array pattern ancestor");
        assert_eq!(pattern.kind, NodeKind::ArrayPattern { elements: 3 });
    }

    #[test]
    fn call_initializer_records_callee_path() {
        let (_, model) = bind_source("let frozen = Object.freeze({});");
        let frozen = variable(&model, "frozen");
        let declarator = model
            .syntax
            .ancestors(frozen.definitions[0].name_node)
            .find(|n| matches!(n.kind, NodeKind::VariableDeclarator { .. }))
            .expect("declarator");

        let children = model.syntax.children(declarator.id);
        assert_eq!(
            model.syntax.kind(children[1]),
            &NodeKind::CallExpression {
                callee: Some("Object.freeze".to_string())
            }
        );
    }

    #[test]
    fn switch_case_hosts_statements() {
        let (_, model) = bind_source("switch (v) { case 0: let x; x = 1; }");
        let x = variable(&model, "x");
        let write = x.references[0].node;

        let kinds: Vec<_> = model
            .syntax
            .ancestors(write)
            .map(|n| n.kind.clone())
            .take(3)
            .collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::AssignmentExpression,
                NodeKind::ExpressionStatement,
                NodeKind::SwitchCase,
            ]
        );
        assert_eq!(model.scopes.get(x.scope).kind, ScopeKind::Switch);
    }

    #[test]
    fn static_block_hosts_statements() {
        let (_, model) = bind_source("class A { static { let x; x = 1; } }");
        let x = variable(&model, "x");
        let write = x.references[0].node;

        let kinds: Vec<_> = model
            .syntax
            .ancestors(write)
            .map(|n| n.kind.clone())
            .take(3)
            .collect();

        assert_eq!(
            kinds,
            vec![
                NodeKind::AssignmentExpression,
                NodeKind::ExpressionStatement,
                NodeKind::StaticBlock,
            ]
        );
        assert_eq!(model.scopes.get(x.scope).kind, ScopeKind::StaticBlock);
    }

    #[test]
    fn while_test_assignment_is_not_statement_positioned() {
        let (_, model) = bind_source("let a; while (a = foo());");
        let a = variable(&model, "a");
        let write = a.references[0].node;

        let parent = model.syntax.parent(write).expect("parent");
        assert_eq!(
            model.syntax.kind(parent),
            &NodeKind::AssignmentExpression
        );
        let grandparent = model.syntax.parent(parent).expect("grandparent");
        assert_eq!(model.syntax.kind(grandparent), &NodeKind::OtherStatement);
    }
}
